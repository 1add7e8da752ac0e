use std::sync::Arc;

use axum::{extract::State, response::Html};

use super::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");
const LIFF_ID_PLACEHOLDER: &str = "{{LIFF_ID}}";

/// Fill the LIFF ID into the embedded page
///
/// The ID goes into a JS string literal, so only characters LIFF IDs use
/// (alphanumerics and `-`) are kept.
pub fn render_index_page(liff_id: Option<&str>) -> String {
    let liff_id: String = liff_id
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    INDEX_TEMPLATE.replace(LIFF_ID_PLACEHOLDER, &liff_id)
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_page.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liff_id_is_injected() {
        let page = render_index_page(Some("1657000000-AbCdEfGh"));
        assert!(page.contains(r#"const LIFF_ID = "1657000000-AbCdEfGh";"#));
        assert!(!page.contains(LIFF_ID_PLACEHOLDER));
    }

    #[test]
    fn test_liff_id_is_sanitized() {
        let page = render_index_page(Some(r#"abc";alert(1)//"#));
        assert!(page.contains(r#"const LIFF_ID = "abcalert1";"#));
    }

    #[test]
    fn test_page_calls_send_endpoint_with_token_header() {
        let page = render_index_page(None);
        assert!(page.contains("/api/send-message"));
        assert!(page.contains("x-liff-access-token"));
    }
}
