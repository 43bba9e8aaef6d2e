use crate::domain::Message;

/// Renders a message as a log block:
/// `<div class="message user"><strong>You:</strong> text</div>`.
///
/// The text is HTML-escaped before newlines become `<br>`, so markup in
/// message text is shown literally.
pub fn render_html(message: &Message) -> String {
    let sender = message.sender();
    let escaped = html_escape::encode_text(message.text());
    let body = escaped.replace('\n', "<br>");

    format!(
        r#"<div class="message {}"><strong>{}:</strong> {}</div>"#,
        sender.as_str(),
        sender.display_name(),
        body
    )
}

/// Renders a message for a terminal. Continuation lines are indented under
/// the first line's text.
pub fn render_plain(message: &Message) -> String {
    let label = format!("{}: ", message.sender().display_name());
    let indent = " ".repeat(label.chars().count());

    let mut out = String::new();
    for (i, line) in message.text().split('\n').enumerate() {
        if i == 0 {
            out.push_str(&label);
        } else {
            out.push('\n');
            out.push_str(&indent);
        }
        out.push_str(line);
    }
    out
}
