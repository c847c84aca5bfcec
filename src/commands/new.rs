use tracing::debug;

use crate::models::Output;

pub fn run(name: Option<String>, answer: Option<String>) -> Output {
    let mut output = Output::default();
    output.set_name(name);
    output.set_value(answer);

    debug!(?output, "built output");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_output() {
        let output = run(Some("q1".to_string()), Some("yes".to_string()));
        assert_eq!(output, Output::new("q1", "yes"));
    }

    #[test]
    fn test_new_output_with_absent_fields() {
        assert_eq!(run(None, None), Output::default());

        let output = run(None, Some(String::new()));
        assert_eq!(output.name(), None);
        assert_eq!(output.value(), Some(""));
    }
}
