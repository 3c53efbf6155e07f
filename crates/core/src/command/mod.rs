//! Serial command interpreter
//!
//! Commands are single text lines with fixed byte offsets:
//!
//! | Line        | Rule                                  | Effect                     |
//! |-------------|---------------------------------------|----------------------------|
//! | `R`         | shorter than 3 bytes, starts with `R` | reset every channel        |
//! | `Cx YYYY`   | longer than 4 bytes, starts with `C`  | channel x static at YYYY μs|
//! | `Ax PPPP`   | longer than 4 bytes, starts with `A`  | channel x cyclic, PPPP ms  |
//!
//! The channel number is the single byte at offset 1 (1-based). Offset 2 is
//! a separator and is skipped without being checked. The value runs from
//! offset 3 to the end of the line. Rules are tried in the order R, C, A and
//! the first match wins.
//!
//! Numeric fields follow C `atol` rules: leading whitespace and a sign are
//! accepted, digits are consumed up to the first non-digit, and a field
//! with no digits reads as 0, which never passes a range check.

use core::fmt;
use core::num::NonZeroU32;

use crate::channel::{ChannelError, ChannelStore, CHANNEL_COUNT, PULSE_MAX_US, PULSE_MIN_US};

/// Byte offset of the channel digit
const CHANNEL_OFFSET: usize = 1;

/// Byte offset where the value field starts
const VALUE_OFFSET: usize = 3;

/// `C`/`A` lines must be longer than this
const MIN_SET_LINE_LEN: usize = 4;

/// `R` lines must be shorter than this
const MAX_RESET_LINE_LEN: usize = 3;

/// A parsed, validated command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Every channel back to neutral and static
    Reset,
    /// Static pulse width on one channel
    SetStatic {
        /// 0-based channel index
        channel: usize,
        /// Pulse width (μs)
        pulse_us: u16,
    },
    /// Cyclic waveform on one channel
    SetCyclic {
        /// 0-based channel index
        channel: usize,
        /// Waveform period (ms)
        period_ms: NonZeroU32,
    },
}

impl Command {
    /// Apply the command to the channel store
    pub fn apply(&self, store: &mut ChannelStore, now_ms: u64) -> Result<(), ChannelError> {
        match *self {
            Command::Reset => {
                store.reset_all();
                Ok(())
            }
            Command::SetStatic { channel, pulse_us } => store.set_static(channel, pulse_us),
            Command::SetCyclic { channel, period_ms } => {
                store.set_cyclic(channel, period_ms, now_ms)
            }
        }
    }
}

/// Acknowledgement text for an applied command
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Reset => write!(f, "All channels reset to {}", crate::channel::PULSE_NEUTRAL_US),
            Command::SetStatic { channel, pulse_us } => {
                write!(f, "Channel {} set to {}", channel + 1, pulse_us)
            }
            Command::SetCyclic { channel, period_ms } => write!(
                f,
                "Channel {} cycling with period {} ms",
                channel + 1,
                period_ms
            ),
        }
    }
}

/// Rejected command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Line matches no command rule
    InvalidFormat,
    /// `C` line with a bad channel or pulse width
    InvalidStatic,
    /// `A` line with a bad channel or period
    InvalidCyclic,
}

impl CommandError {
    /// Short reason for log output
    pub fn reason(&self) -> &'static str {
        match self {
            CommandError::InvalidFormat => "unrecognised line",
            CommandError::InvalidStatic => "bad static channel or pulse width",
            CommandError::InvalidCyclic => "bad cyclic channel or period",
        }
    }
}

/// Store rejections surface as the static-command diagnostic; `interpret`
/// reports cyclic commands as [`CommandError::InvalidCyclic`] instead.
impl From<ChannelError> for CommandError {
    fn from(_: ChannelError) -> Self {
        CommandError::InvalidStatic
    }
}

/// Diagnostic text sent back over the serial console
impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidFormat => {
                write!(f, "Invalid input format. Use format 'Cx YYYY', 'Ax PPPP' or 'R'.")
            }
            CommandError::InvalidStatic => write!(
                f,
                "Invalid input. Use format 'Cx YYYY' (x: channel 1-{}, YYYY: {}-{}).",
                CHANNEL_COUNT, PULSE_MIN_US, PULSE_MAX_US
            ),
            CommandError::InvalidCyclic => write!(
                f,
                "Invalid input. Use format 'Ax PPPP' (x: channel 1-{}, PPPP: period in ms > 0).",
                CHANNEL_COUNT
            ),
        }
    }
}

/// Parse one line (without its newline) into a command
pub fn parse(line: &[u8]) -> Result<Command, CommandError> {
    match line.first() {
        Some(b'R') if line.len() < MAX_RESET_LINE_LEN => Ok(Command::Reset),
        Some(b'C') if line.len() > MIN_SET_LINE_LEN => {
            let (channel, value) = split_fields(line);
            match (channel, u16::try_from(value)) {
                (Some(channel), Ok(pulse_us)) if crate::channel::is_valid_pulse(pulse_us) => {
                    Ok(Command::SetStatic { channel, pulse_us })
                }
                _ => Err(CommandError::InvalidStatic),
            }
        }
        Some(b'A') if line.len() > MIN_SET_LINE_LEN => {
            let (channel, value) = split_fields(line);
            let period_ms = u32::try_from(value).ok().and_then(NonZeroU32::new);
            match (channel, period_ms) {
                (Some(channel), Some(period_ms)) => Ok(Command::SetCyclic { channel, period_ms }),
                _ => Err(CommandError::InvalidCyclic),
            }
        }
        _ => Err(CommandError::InvalidFormat),
    }
}

/// Parse a line and apply it to the store
///
/// Returns the applied command for acknowledgement. On error the store is
/// unchanged.
pub fn interpret(
    store: &mut ChannelStore,
    line: &[u8],
    now_ms: u64,
) -> Result<Command, CommandError> {
    let command = parse(line)?;
    command.apply(store, now_ms).map_err(|err| match command {
        Command::SetCyclic { .. } => CommandError::InvalidCyclic,
        _ => CommandError::from(err),
    })?;
    Ok(command)
}

/// Channel index (0-based, validated) and raw value of a `C`/`A` line
fn split_fields(line: &[u8]) -> (Option<usize>, i64) {
    let number = parse_int(&line[CHANNEL_OFFSET..CHANNEL_OFFSET + 1]);
    let channel = usize::try_from(number - 1)
        .ok()
        .filter(|&index| index < CHANNEL_COUNT);
    let value = parse_int(line.get(VALUE_OFFSET..).unwrap_or(&[]));
    (channel, value)
}

/// Parse a leading decimal integer, `atol` style
///
/// Returns 0 when no digits are present. Digit runs that overflow saturate.
pub fn parse_int(field: &[u8]) -> i64 {
    let mut bytes = field
        .iter()
        .copied()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let magnitude = bytes
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
