use yew::prelude::*;

/// A run of title text, either emphasised or plain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub bold: bool,
}

/// Splits title markup where every `*` toggles emphasis.
///
/// `"*R*e*a*lit*y*"` gives bold `R`, plain `e`, bold `a`, plain `lit`, bold `y`.
pub fn segments(markup: &str) -> Vec<Segment<'_>> {
    markup
        .split('*')
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(i, text)| Segment { text, bold: i % 2 == 1 })
        .collect()
}

pub fn render(markup: &str) -> Html {
    segments(markup)
        .into_iter()
        .map(|s| {
            if s.bold {
                html! { <b>{ s.text.to_string() }</b> }
            } else {
                html! { { s.text.to_string() } }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(markup: &str) -> Vec<(&str, bool)> {
        segments(markup).into_iter().map(|s| (s.text, s.bold)).collect()
    }

    #[test]
    fn alternates_emphasis() {
        assert_eq!(
            flat("*R*e*a*lit*y*"),
            vec![("R", true), ("e", false), ("a", true), ("lit", false), ("y", true)]
        );
    }

    #[test]
    fn leading_plain_text() {
        assert_eq!(
            flat("Dis*P*l*a*ceme*n*t"),
            vec![
                ("Dis", false),
                ("P", true),
                ("l", false),
                ("a", true),
                ("ceme", false),
                ("n", true),
                ("t", false),
            ]
        );
    }

    #[test]
    fn adjacent_bold_runs_drop_empty_segments() {
        assert_eq!(
            flat("*P**o*li"),
            vec![("P", true), ("o", true), ("li", false)]
        );
    }

    #[test]
    fn unmatched_marker_leaves_rest_bold() {
        assert_eq!(flat("Eth*ics"), vec![("Eth", false), ("ics", true)]);
    }

    #[test]
    fn plain_title_is_one_segment() {
        assert_eq!(flat("Ethics"), vec![("Ethics", false)]);
        assert!(flat("").is_empty());
    }
}
