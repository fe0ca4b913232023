//! Color modes stay local to the logger that selected them.

use pretty_assertions::assert_eq;
use severo_log::{ColorMode, Context, Flags, Options, SeveroLog, SharedBuffer, Sink};

fn render_with(color: ColorMode) -> String {
    let (sink, buffer): (Sink, SharedBuffer) = Sink::buffer();
    let log = SeveroLog::builder()
        .sink(sink)
        .options(Options {
            color,
            ..Options::default()
        })
        .context(Context::Verbose)
        .build();
    log.print(format_args!("hello"));
    buffer.contents()
}

fn strip_timestamp(line: &str) -> String {
    regex::Regex::new(r"\d")
        .expect("valid regex")
        .replace_all(line, "0")
        .into_owned()
}

#[test]
fn always_logger_does_not_leak_color_into_auto_loggers() {
    let auto_before = render_with(ColorMode::Auto);
    let forced = render_with(ColorMode::Always);
    let auto_after = render_with(ColorMode::Auto);

    assert!(forced.contains("\x1b["), "forced output was {forced:?}");
    assert_eq!(strip_timestamp(&auto_before), strip_timestamp(&auto_after));
}

#[test]
fn never_renders_plain_text_even_after_always() {
    let _ = render_with(ColorMode::Always);
    let plain = render_with(ColorMode::Never);
    assert!(!plain.contains('\x1b'), "plain output was {plain:?}");
}

#[test]
fn always_ignores_the_terminal_decision() {
    let (sink, buffer) = Sink::buffer();
    let log = SeveroLog::builder()
        .sink(sink)
        .options(Options {
            color: ColorMode::Always,
            ..Options::default()
        })
        .context(Context::Default)
        .build();
    let handle = log.logger();
    assert_eq!(handle.options().flags, Flags::STD);

    log.print(format_args!("warning: low disk"));
    let output = buffer.contents();
    assert!(output.contains("\x1b[38;2;201;205;212m"), "got {output:?}");
    assert!(output.ends_with("low disk\n"));
}
