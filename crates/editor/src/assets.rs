//! Static markup embedded in every edit view.
//!
//! Only the text comes from configuration; structure and class names are
//! fixed because the client script and stylesheet depend on them.

use quire_config::EditorText;

use crate::element::escape;

/// Publish date/time selectors. Not content-derived and never hidden.
///
/// Labels are element content and pass through; placeholders are escaped.
pub fn publish_time(text: &EditorText) -> String {
    let months: String = text
        .months
        .iter()
        .enumerate()
        .map(|(i, month)| format!("\t\t\t<option value=\"{}\">{month}</option>\n", i + 1))
        .collect();

    format!(
        r#"
<div class="row content-only __ponzu">
	<div class="input-field col s6">
		<label class="active">{month_label}</label>
		<select class="month __ponzu browser-default">
{months}		</select>
	</div>
	<div class="input-field col s2">
		<label class="active">{day}</label>
		<input value="" class="day __ponzu" maxlength="2" type="text" placeholder="{day_attr}" />
	</div>
	<div class="input-field col s4">
		<label class="active">{year}</label>
		<input value="" class="year __ponzu" maxlength="4" type="text" placeholder="{year_attr}" />
	</div>
</div>

<div class="row content-only __ponzu">
	<div class="input-field col s3">
		<label class="active">{hour}</label>
		<input value="" class="hour __ponzu" maxlength="2" type="text" placeholder="{hour_attr}" />
	</div>
	<div class="col s1">:</div>
	<div class="input-field col s3">
		<label class="active">{minute}</label>
		<input value="" class="minute __ponzu" maxlength="2" type="text" placeholder="{minute_attr}" />
	</div>
	<div class="input-field col s4">
		<label class="active">{period}</label>
		<select class="period __ponzu browser-default">
			<option value="AM">AM</option>
			<option value="PM">PM</option>
		</select>
	</div>
</div>
"#,
        month_label = text.month_label,
        day = text.day_label,
        year = text.year_label,
        hour = text.hour_label,
        minute = text.minute_label,
        period = text.period_label,
        day_attr = escape(&text.day_label),
        year_attr = escape(&text.year_label),
        hour_attr = escape(&text.hour_label),
        minute_attr = escape(&text.minute_label),
    )
}

/// Save control, plus delete when `delete` is set.
pub fn controls(text: &EditorText, delete: bool) -> String {
    let delete_button = if delete {
        format!(
            "\n\t\t<button class=\"right waves-effect waves-light btn red delete-post\" type=\"submit\">{}</button>",
            text.delete
        )
    } else {
        String::new()
    };

    format!(
        r#"
	<div class="input-field post-controls">
		<button class="right waves-effect waves-light btn green save-post" type="submit">{}</button>{delete_button}
	</div>
"#,
        text.save
    )
}

/// Approve/reject controls and the pending-approval notice.
pub fn approval(text: &EditorText) -> String {
    format!(
        r#"
<div class="row external post-controls">
	<div class="col s12 input-field">
		<button class="right waves-effect waves-light btn blue approve-post" type="submit">{}</button>
		<button class="right waves-effect waves-light btn grey darken-2 reject-post" type="submit">{}</button>
	</div>
	<label class="approve-details right-align col s12">{}</label>
</div>
"#,
        text.approve, text.reject, text.approval_notice
    )
}

const SCRIPT: &str = r#"
<script>
	$(function() {
		var form = $('form'),
			save = form.find('button.save-post'),
			del = form.find('button.delete-post'),
			external = form.find('.post-controls.external'),
			id = form.find('input[name=id]'),
			timestamp = $('.__ponzu.content-only'),
			slug = $('input[name=slug]');

		// new item, or not the content editor
		if (id.val() === '-1' || form.attr('action') !== '/admin/edit') {
			del.hide();
			external.hide();
		}

		if (getParam('status') !== 'pending') {
			external.hide();
		}

		// addons carry no timestamp or slug
		if (form.attr('action') === '/admin/addon') {
			timestamp.hide();
			slug.parent().hide();
		}

		save.on('click', function(e) {
			e.preventDefault();

			if (getParam('status') === 'pending') {
				var action = form.attr('action');
				form.attr('action', action + '?status=pending')
			}

			form.submit();
		});

		del.on('click', function(e) {
			e.preventDefault();
			var action = form.attr('action');
			action = action + '/delete';
			form.attr('action', action);

			if (confirm("__DELETE_CONFIRM__")) {
				form.submit();
			}
		});

		external.find('button.approve-post').on('click', function(e) {
			e.preventDefault();
			var action = form.attr('action');
			action = action + '/approve';
			form.attr('action', action);

			form.submit();
		});

		external.find('button.reject-post').on('click', function(e) {
			e.preventDefault();
			var action = form.attr('action');
			action = action + '/delete?reject=true';
			form.attr('action', action);

			if (confirm("__REJECT_CONFIRM__")) {
				form.submit();
			}
		});
	});
</script>
"#;

/// Client script binding the controls to the enclosing form.
pub fn script(text: &EditorText) -> String {
    SCRIPT
        .replace("__DELETE_CONFIRM__", &js_string(&text.delete_confirm))
        .replace("__REJECT_CONFIRM__", &js_string(&text.reject_confirm))
}

/// Escape configured text for a double-quoted JS string inside `<script>`.
fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' if chars.peek() == Some(&'/') => out.push_str("<\\"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_time_lists_all_months_in_order() {
        let html = publish_time(&EditorText::default());
        assert!(html.contains(r#"<option value="1">January</option>"#));
        assert!(html.contains(r#"<option value="12">December</option>"#));
        assert!(html.find("January").unwrap() < html.find("December").unwrap());
        for class in ["month", "day", "year", "hour", "minute", "period"] {
            assert!(html.contains(&format!("{class} __ponzu")), "missing {class}");
        }
    }

    #[test]
    fn controls_toggle_delete() {
        let text = EditorText::default();
        assert!(!controls(&text, false).contains("delete-post"));
        assert!(controls(&text, true).contains("delete-post"));
        assert!(controls(&text, false).contains("save-post"));
    }

    #[test]
    fn translated_text_is_used() {
        let text = EditorText {
            save: "Salvesta".into(),
            approve: "Kinnita".into(),
            ..EditorText::default()
        };
        assert!(controls(&text, false).contains(">Salvesta<"));
        assert!(approval(&text).contains(">Kinnita<"));
    }

    #[test]
    fn script_embeds_confirm_text() {
        let text = EditorText {
            delete_confirm: r#"Really "delete"?</script>"#.into(),
            ..EditorText::default()
        };
        let js = script(&text);
        assert!(js.contains(r#"confirm("Really \"delete\"?<\/script>")"#));
        assert!(!js.contains("__DELETE_CONFIRM__"));
        assert!(!js.contains("__REJECT_CONFIRM__"));
    }

    #[test]
    fn multi_line_confirm_text_stays_one_literal() {
        let text = EditorText {
            delete_confirm: "Line one\nLine two".into(),
            reject_confirm: "ends with a backslash \\".into(),
            ..EditorText::default()
        };
        let js = script(&text);
        assert!(js.contains(r#"confirm("Line one\nLine two")"#));
        assert!(js.contains(r#"confirm("ends with a backslash \\")"#));
        assert!(!js.contains("confirm(\"Line one\n"));
    }

    #[test]
    fn default_confirm_text_renders_escaped_newlines() {
        let js = script(&EditorText::default());
        assert!(js.contains(r#"confirm("Please confirm:\n\nAre you sure"#));
    }

    #[test]
    fn js_string_escapes_line_separators() {
        assert_eq!(js_string("a\u{2028}b\u{2029}c\r"), r"a\u2028b\u2029c\r");
    }

    #[test]
    fn placeholders_are_attribute_escaped() {
        let text = EditorText {
            day_label: r#"P"V"#.into(),
            ..EditorText::default()
        };
        let html = publish_time(&text);
        assert!(html.contains(r#"placeholder="P&#34;V""#));
        assert!(!html.contains(r#"placeholder="P"V""#));
    }
}
