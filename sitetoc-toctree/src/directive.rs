//! Extraction of `{toctree}` directive blocks from Markdown documents.
//!
//! Exactly one directive form is recognized: a fenced block whose opening
//! fence is a line reading ```` ```{toctree} ```` and whose closing fence is
//! the next line consisting solely of ```` ``` ````. Parsing is deliberately
//! permissive; the directive format is a lightweight convention, not a
//! validated schema.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{
  types::{OptionValue, Toctree},
  utils::never_matching_regex,
};

/// Opening fence of a toctree directive block.
static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^```\{toctree\}[ \t]*$").unwrap_or_else(|e| {
    error!("Failed to compile FENCE_OPEN regex: {e}");
    never_matching_regex()
  })
});

/// Closing fence: a line consisting solely of the fence marker.
static FENCE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^```[ \t]*$").unwrap_or_else(|e| {
    error!("Failed to compile FENCE_CLOSE regex: {e}");
    never_matching_regex()
  })
});

/// Option line: a colon, an identifier, a colon, then optional text.
static OPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^:([A-Za-z0-9_-]+):(.*)$").unwrap_or_else(|e| {
    error!("Failed to compile OPTION_LINE regex: {e}");
    never_matching_regex()
  })
});

/// Extract the first `{toctree}` directive block from a document.
///
/// Returns `None` when the document contains no complete directive block;
/// absence is not an error. Subsequent blocks are ignored. Entry order and
/// option insertion order are preserved exactly as encountered.
#[must_use]
pub fn extract_toctree(text: &str) -> Option<Toctree> {
  let open = FENCE_OPEN.find(text)?;
  let close = FENCE_CLOSE.find_at(text, open.end())?;
  let body = &text[open.end()..close.start()];

  let mut toctree = Toctree::default();
  for line in body.lines() {
    let line = line.trim();
    if line.is_empty() {
      continue;
    }

    if let Some(caps) = OPTION_LINE.captures(line) {
      let key = caps[1].to_string();
      toctree.options.insert(key, coerce_option_value(&caps[2]));
    } else {
      // Anything that is not an option line is an entry reference,
      // including malformed option-ish lines.
      toctree.entries.push(line.to_string());
    }
  }

  Some(toctree)
}

/// Coerce a raw option value: empty means a boolean flag, all digits an
/// integer, anything else a trimmed string.
fn coerce_option_value(raw: &str) -> OptionValue {
  let value = raw.trim();
  if value.is_empty() {
    return OptionValue::Bool(true);
  }

  if value.chars().all(|c| c.is_ascii_digit())
    && let Ok(n) = value.parse::<u64>()
  {
    return OptionValue::Int(n);
  }

  OptionValue::Str(value.to_string())
}
