use gradlegen_core::split_by_spaces;
use gradlegen_script::{FunctionCall, ListValue, Quote};

/// Function that appends native compiler flags.
pub const CFLAGS_FUNCTION: &str = "CFlags.addAll";

/// `CFlags.addAll(['-a', '-b'])` from a space separated flags string,
/// followed by `additional` flags.
pub fn flags_call<I, S>(flags: &str, additional: I) -> FunctionCall
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut all = split_by_spaces(flags);
    all.extend(additional.into_iter().map(Into::into));
    FunctionCall::with_argument(CFLAGS_FUNCTION, ListValue::from_simples(all, Quote::Simple))
}

#[cfg(test)]
mod tests {
    use gradlegen_script::{Node, Script};

    use super::*;

    fn render(call: FunctionCall) -> String {
        let mut script = Script::new();
        script.push(Node::FunctionCall(call));
        script.render()
    }

    #[test]
    fn test_flags_call() {
        assert_eq!(
            render(flags_call("-Wall  -O2", ["-I/ndk/include"])),
            "\nCFlags.addAll(['-Wall', '-O2', '-I/ndk/include'])\n"
        );
    }

    #[test]
    fn test_empty_flags_call() {
        assert_eq!(
            render(flags_call("", Vec::<String>::new())),
            "\nCFlags.addAll([])\n"
        );
    }
}
