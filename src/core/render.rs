use crate::core::Post;
use crate::utils::error::Result;

/// Title and body of a single post, as a heading plus paragraph.
pub fn post_detail(post: &Post) -> String {
    format!("<h3>{}</h3>\n<p>{}</p>", post.title, post.body)
}

/// A mutation outcome: heading plus the server's returned representation,
/// pretty-printed.
pub fn mutation_result(heading: &str, pretty_json: &str) -> String {
    format!("<h4>{}</h4>\n<pre>{}</pre>", heading, pretty_json)
}

pub fn error_message(message: &str) -> String {
    format!("<p style=\"color:red;\">{}</p>", message)
}

/// Parses a raw response body as JSON and pretty-prints it.
pub fn pretty_json(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_detail_markup() {
        let post = Post {
            id: 1,
            title: "foo".to_string(),
            body: "bar".to_string(),
            user_id: 1,
        };
        assert_eq!(post_detail(&post), "<h3>foo</h3>\n<p>bar</p>");
    }

    #[test]
    fn test_error_markup() {
        assert_eq!(
            error_message("boom"),
            "<p style=\"color:red;\">boom</p>"
        );
    }

    #[test]
    fn test_pretty_json_preserves_fields() {
        let pretty = pretty_json(r#"{"id":101,"title":"A"}"#).unwrap();
        assert!(pretty.contains("\"title\": \"A\""));
        assert!(pretty.contains("\"id\": 101"));
    }

    #[test]
    fn test_pretty_json_rejects_malformed_body() {
        assert!(pretty_json("<html>not json</html>").is_err());
    }
}
