//! Admin page shell wrapped around an edit view.
//!
//! The view's client script expects jQuery, a `getParam` helper, a form
//! posting to `/admin/edit`, and a hidden `id` input.

use quire_core::{Document, ItemStatus};
use quire_editor::element::escape;

/// Action the edit form posts to. The client script keys off this value.
pub const EDIT_ACTION: &str = "/admin/edit";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<title>Quire Admin</title>
	<script src="https://code.jquery.com/jquery-2.1.4.min.js"></script>
	<script>
		function getParam(name) {
			var params = new URLSearchParams(window.location.search);
			return params.get(name) || '';
		}
	</script>
</head>
<body>
"#;

const FOOT: &str = "</body>\n</html>\n";

/// Edit page location for an item, carrying the `status` bucket parameter.
pub fn edit_url(content_type: &str, id: i64, status: ItemStatus) -> String {
    let mut url = format!("{EDIT_ACTION}?type={content_type}&id={id}");
    if let Some(status) = status.as_query() {
        url.push_str("&status=");
        url.push_str(status);
    }
    url
}

/// Wrap `view` in a full page with a form posting to [`EDIT_ACTION`].
pub fn edit_page(content_type: &str, id: i64, view: &Document) -> String {
    let mut out = String::with_capacity(HEAD.len() + view.len() + 512);
    out.push_str(HEAD);
    out.push_str(&format!(
        "<form method=\"post\" action=\"{EDIT_ACTION}\" enctype=\"application/x-www-form-urlencoded\">\n"
    ));
    out.push_str(&format!("<input type=\"hidden\" name=\"id\" value=\"{id}\" />\n"));
    out.push_str(&format!(
        "<input type=\"hidden\" name=\"type\" value=\"{}\" />\n",
        escape(content_type)
    ));
    out.push_str(&view.to_string_lossy());
    out.push_str("\n</form>\n");
    out.push_str(FOOT);
    out
}
