use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::arg::LogArg;
use crate::caller::Caller;
use crate::level::Level;

/// Marker placed in front of the message on a context variant's detail line.
pub const DETAIL_ARROW: &str = "↳";

/// Joins log arguments into a single message body.
///
/// Every argument is rendered with its `Display` implementation and the
/// renderings are concatenated. A single space is inserted between two
/// adjacent operands only when neither of them is a string (see
/// [`LogArg::is_string`]); next to a string, spacing is up to the caller.
///
/// ```
/// # use tintlog::formatter::concat;
/// assert_eq!(concat(&[&"build", &" ", &"ok"]), "build ok");
/// assert_eq!(concat(&[&"retries=", &3]), "retries=3");
/// assert_eq!(concat(&[&1, &2, &"x", &3.5, &true]), "1 2x3.5 true");
/// assert_eq!(concat(&[]), "");
/// ```
pub fn concat(args: &[&dyn LogArg]) -> String {
    let mut out = String::new();
    let mut prev_is_string = true;
    for arg in args {
        let is_string = arg.is_string();
        if !is_string && !prev_is_string {
            out.push(' ');
        }
        // writing into a String cannot fail
        let _ = write!(out, "{}", arg);
        prev_is_string = is_string;
    }
    out
}

/// Renders the unstyled `[ LEVEL] date time (function:line)` header.
///
/// The message is not part of the header. Unknown callers render as `(:)`
/// with blank fields.
pub fn format_plain(
    level: Level,
    _message: &str,
    date: &str,
    time: &str,
    caller: &Caller,
) -> String {
    format!(
        "[{}] {} {} ({}:{})",
        level.tag(),
        date,
        time,
        caller.function(),
        caller.line_text(),
    )
}

/// Renders the unstyled record kept for delivery: the [`format_plain`]
/// header, followed by a `↳ message` line when the message is non-empty so
/// batch reports and alerts carry the text as well as the location.
pub fn format_record(level: Level, message: &str, date: &str, time: &str, caller: &Caller) -> String {
    let mut out = format_plain(level, message, date, time, caller);
    if !message.is_empty() {
        out.push('\n');
        out.push_str(DETAIL_ARROW);
        out.push(' ');
        out.push_str(message);
    }
    out
}

/// Renders a styled console record, one entry per output line.
///
/// Plain levels put the message in bold after the time. Context levels put
/// `(function:line)` there instead and, when `has_args` is set, add a second
/// `↳ message` line. The header is produced even with zero arguments.
///
/// # Arguments
///
/// * `level` - Severity, selects the tag color and the header layout
/// * `message` - Already concatenated message body
/// * `date` / `time` - Display strings from [`Stamp`](crate::clock::Stamp)
/// * `caller` - Location used by context levels, ignored otherwise
/// * `has_args` - Whether the call supplied any arguments at all
pub fn format_styled(
    level: Level,
    message: &str,
    date: &str,
    time: &str,
    caller: &Caller,
    has_args: bool,
) -> Vec<String> {
    let tag = tag_style(level);
    let date = date.dimmed().italic();
    let time = time.underline();

    if !level.has_context() {
        return vec![format!("[{}] {} {} {}", tag, date, time, message.bold())];
    }

    let mut lines = vec![format!(
        "[{}] {} {} ({}:{})",
        tag,
        date,
        time,
        caller.function().bright_blue(),
        caller.line_text().as_str().bold(),
    )];
    if has_args {
        lines.push(format!(
            "{} {}",
            DETAIL_ARROW,
            message.bold().bright_yellow()
        ));
    }
    lines
}

/// Renders the single line printed by the instance-free Error printer.
pub fn format_direct_error(message: &str, date: &str, time: &str) -> String {
    format!(
        "[{}] {} {} {}",
        tag_style(Level::Error),
        date.dimmed().italic(),
        time.underline(),
        message.bold(),
    )
}

fn tag_style(level: Level) -> ColoredString {
    let tag = level.tag().bold();
    match level {
        Level::Error => tag.bright_red(),
        Level::Info | Level::InfoWithContext => tag.bright_green(),
        Level::Warn | Level::WarnWithContext => tag.truecolor(255, 165, 0),
        Level::Debug => tag.magenta(),
        Level::Alert => tag.red().reversed(),
    }
}
