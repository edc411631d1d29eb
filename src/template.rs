use crate::errors::TemplateError;

/// Substitute `{year}` in a URL or path template.
///
/// `{{` and `}}` produce literal braces. Any other placeholder, or a brace
/// without its partner, is rejected.
pub fn render_year(template: &str, year: i32) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + 4);
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, n) in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(TemplateError::UnbalancedBrace {
                        template: template.to_string(),
                        position: pos,
                    });
                }
                if name != "year" {
                    return Err(TemplateError::UnknownPlaceholder {
                        template: template.to_string(),
                        name,
                    });
                }
                out.push_str(&year.to_string());
            }
            '}' => {
                return Err(TemplateError::UnbalancedBrace {
                    template: template.to_string(),
                    position: pos,
                });
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
