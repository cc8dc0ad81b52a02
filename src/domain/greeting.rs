// The only content type for which we go looking in the request body.
// Compared byte for byte - a `; charset=utf-8` suffix does not count.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const NAME_KEY: &str = "name";

/// Everywhere a request can tell us who to greet, in order of precedence.
pub struct NameSources<'a> {
    /// Whatever followed `/hello/` in the url (may span several segments).
    pub path: Option<&'a str>,
    /// The decoded query pairs, in the order they appeared.
    pub query: &'a [(String, String)],
    /// The decoded form pairs - only `Some` when the body was form encoded.
    pub form: Option<&'a [(String, String)]>,
}

impl<'a> NameSources<'a> {
    /// Path beats query, query beats form.
    ///
    /// An empty value at one level counts as "not supplied" and we move on to
    /// the next one. Once a non-empty value is found nothing else is looked at.
    pub fn resolve(&self) -> Option<&'a str> {
        non_empty(self.path)
            .or_else(|| first_name(self.query))
            .or_else(|| self.form.and_then(first_name))
    }
}

// only the first `name` pair is considered, even if it is empty
fn first_name(pairs: &[(String, String)]) -> Option<&str> {
    let value = pairs
        .iter()
        .find(|(key, _)| key == NAME_KEY)
        .map(|(_, value)| value.as_str());
    non_empty(value)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn render_greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Hello {}!", name),
        None => "Hello!".to_string(),
    }
}

pub fn is_form_content_type(content_type: Option<&str>) -> bool {
    content_type == Some(FORM_CONTENT_TYPE)
}
