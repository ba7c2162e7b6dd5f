use secrecy::{ExposeSecret, SecretString};

pub const ERROR_MESSAGE: &str = "Password does not meet the requirements.";

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>{body}</body></html>"
    )
}

pub(crate) fn home_page(error: Option<&str>) -> String {
    let error = error
        .map(|e| format!("<p class=\"error\">{}</p>", escape_html(e)))
        .unwrap_or_default();
    page(
        "Password check",
        &format!(
            "<h1>Password check</h1>{error}\
<form method=\"post\" action=\"/\">\
<label for=\"password\">Enter your password:</label> \
<input type=\"password\" id=\"password\" name=\"password\" required> \
<button type=\"submit\">Submit</button>\
</form>"
        ),
    )
}

pub(crate) fn welcome_page(password: &SecretString) -> String {
    page(
        "Welcome",
        &format!(
            "<h1>Welcome!</h1><p>Your password <code>{}</code> meets the requirements.</p>\
<p><a href=\"/\">Back</a></p>",
            escape_html(password.expose_secret())
        ),
    )
}
