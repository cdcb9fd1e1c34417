use crate::{CommandLine, CommandRunner, CommandTemplate, ProcessRunner, RunOutcome};

#[cfg(unix)]
fn shell(script: &str) -> CommandLine {
    CommandLine::new("sh").args(["-c", script])
}

/// WHAT: Exit 0 with "OK" on stdout returns exactly "OK"
/// WHY: Successful output must pass through untouched
#[test]
#[cfg(unix)]
fn given_command_printing_ok_when_running_then_exactly_ok() {
    // Given: A command that prints OK and exits 0
    let command = shell("printf OK");

    // When: Running it
    let output = ProcessRunner.run(&command);

    // Then: Exactly the stdout text
    assert_eq!(output, "OK");
}

/// WHAT: Exit 1 with "ERR" on stderr returns exactly "ERR"
/// WHY: Failures substitute stderr for stdout instead of raising
#[test]
#[cfg(unix)]
fn given_command_failing_with_stderr_when_running_then_exactly_err() {
    // Given: A command that writes ERR to stderr and exits 1
    let command = shell("printf ERR >&2; exit 1");

    // When: Running and executing it
    let output = ProcessRunner.run(&command);
    let outcome = ProcessRunner.execute(&command);

    // Then: stderr text, tagged as a failure with status 1
    assert_eq!(output, "ERR");
    assert!(matches!(outcome, RunOutcome::Failed(_)));
    assert_eq!(outcome.status(), Some(1));
}

/// WHAT: Stdout is ignored when the command fails
/// WHY: Only the diagnostic stream is meaningful after a failure
#[test]
#[cfg(unix)]
fn given_failing_command_with_stdout_when_running_then_stdout_discarded() {
    // Given: A failing command writing to both streams
    let command = shell("printf noise; printf broken >&2; exit 3");

    // When/Then: Only stderr is reported
    assert_eq!(ProcessRunner.run(&command), "broken");
}

/// WHAT: A missing binary yields a descriptive string
/// WHY: The runner is total and never propagates spawn errors
#[test]
fn given_nonexistent_binary_when_running_then_descriptive_string_returned() {
    // Given: A binary that cannot exist
    let command = CommandLine::new("/nonexistent/msi-perkeyrgb").args(["--model", "GS65"]);

    // When: Executing it
    let outcome = ProcessRunner.execute(&command);

    // Then: Spawn failure naming the program
    assert!(matches!(outcome, RunOutcome::SpawnFailed { .. }));
    let report = outcome.into_report();
    assert!(!report.is_empty());
    assert!(report.contains("/nonexistent/msi-perkeyrgb"));
}

/// WHAT: Textual command lines run without a shell
/// WHY: Callers holding a plain string get the same contract
#[test]
#[cfg(unix)]
fn given_textual_command_line_when_running_then_words_passed_as_arguments() {
    // Given/When: printf invoked through a whitespace-split line
    let output = ProcessRunner.run_line("printf %s-%s a b");

    // Then: Arguments arrived individually
    assert_eq!(output, "a-b");
}

/// WHAT: Quoted words in a textual command line stay single arguments
/// WHY: Presets or scripts with spaces must not be split apart
#[test]
#[cfg(unix)]
fn given_quoted_arguments_when_running_line_then_quotes_respected() {
    // Given/When: A quoted printf argument and a quoted sh script
    let joined = ProcessRunner.run_line("printf %s| 'a b'");
    let scripted = ProcessRunner.run_line("sh -c 'printf OK'");

    // Then: Each quoted span arrived as one argument
    assert_eq!(joined, "a b|");
    assert_eq!(scripted, "OK");
}

/// WHAT: A line that cannot be tokenized reports why instead of running
/// WHY: run_line is total, so tokenizer errors become the returned text
#[test]
fn given_unterminated_quote_when_running_line_then_tokenizer_reason_returned() {
    // Given/When: A missing closing quote
    let output = ProcessRunner.run_line("sh -c 'printf OK");

    // Then: Descriptive text naming the line, nothing executed
    assert!(output.starts_with("Cannot parse command line"), "{}", output);
    assert!(output.contains("printf OK"));
}

/// WHAT: Blank and garbage command lines still return a string
/// WHY: run_line must never panic for any input
#[test]
fn given_unusable_command_lines_when_running_then_non_empty_string() {
    // Given/When/Then: Empty, whitespace and nonsense input
    let lines = [
        "",
        "   ",
        "\u{0}bad\u{0}",
        "\"open",
        "definitely-not-a-real-binary-4711 --flag",
    ];
    for line in lines {
        assert!(!ProcessRunner.run_line(line).is_empty(), "line {:?}", line);
    }
}

/// WHAT: Applying a preset through the real lighting tool succeeds
/// WHY: End-to-end check against installed hardware
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn given_installed_lighting_tool_when_applying_preset_then_success() {
    // Given: The default template and a real preset
    let model = std::env::var("TEST_PERKEY_MODEL").unwrap_or_else(|_| "GS65".to_string());
    let template = match model.parse() {
        Ok(model) => CommandTemplate::new("msi-perkeyrgb", model),
        Err(_) => CommandTemplate::default(),
    };
    let command = template.with_mode("-p", "default");

    // When: Executing it
    let outcome = ProcessRunner.execute(&command);

    // Then: The tool accepted the command
    assert!(outcome.is_success(), "{}", outcome.report());
}
