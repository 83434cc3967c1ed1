//! App name extraction from versioned folder names.
//!
//! Portable app archives unpack to folders like `FastCopy5.8.1_x64` or
//! `AIMP-5.40.2655`. To group versions of the same app, the version and
//! platform noise has to be stripped off, leaving a stable app name. There is
//! no standard format, so this is a set of heuristics: four independent
//! boundary detectors run over the name and the string is cut at the earliest
//! boundary any of them finds.

/// Separator characters between an app name and its version/platform suffix
const SEPARATORS: &[char] = &['-', '_', ' ', '.'];

/// Platform and release-channel tokens that signal the end of the app name
const PLATFORM_TOKENS: &[&str] = &["x86", "x64", "portable", "beta"];

fn is_sep(b: u8) -> bool {
    matches!(b, b'-' | b'_' | b' ' | b'.')
}

/// Extract the app name from a versioned folder name.
///
/// Total and pure: never fails, never does I/O, and returns the input
/// unchanged when no version boundary is found. Cuts at the earliest boundary
/// strictly after the start of the string; a detector matching at offset 0 is
/// a false positive (the whole name would be "version") and is ignored.
///
/// ```
/// use pivot::normalize::app_name;
///
/// assert_eq!(app_name("FastCopy5.8.1_x64"), "FastCopy");
/// assert_eq!(app_name("AIMP-5.40.2655"), "AIMP");
/// assert_eq!(app_name("Proxmark3GUI V0.2.8-win64-rrg_other-v4.16717"), "Proxmark3GUI");
/// ```
pub fn app_name(folder_name: &str) -> String {
    let bytes = folder_name.as_bytes();

    let candidates = [
        platform_boundary(bytes),
        version_boundary(bytes),
        tail_number_boundary(bytes),
        embedded_version_boundary(bytes),
    ];

    let cutoff = candidates
        .into_iter()
        .flatten()
        .filter(|&i| i > 0)
        .min();

    let name = match cutoff {
        Some(i) => &folder_name[..i],
        None => folder_name,
    };

    name.trim_end_matches(SEPARATORS).to_string()
}

/// Separator followed by a platform/channel token: `x86`, `x64`, `win<N>`,
/// `portable`, `beta`, `rc<N>`. Case-insensitive, earliest match wins.
fn platform_boundary(bytes: &[u8]) -> Option<usize> {
    (0..bytes.len())
        .find(|&i| is_sep(bytes[i]) && platform_token(&bytes[i + 1..]))
}

fn platform_token(rest: &[u8]) -> bool {
    if PLATFORM_TOKENS
        .iter()
        .any(|tok| starts_with_ignore_case(rest, tok.as_bytes()))
    {
        return true;
    }
    // win<digits> and rc<digits> require at least one digit
    for prefix in [&b"win"[..], &b"rc"[..]] {
        if starts_with_ignore_case(rest, prefix)
            && rest
                .get(prefix.len())
                .is_some_and(|b| b.is_ascii_digit())
        {
            return true;
        }
    }
    false
}

/// Separator followed by an optional `v`, a digit, then a dot, underscore,
/// another digit, `x`, `b`, `a`, or the end of the string. Matches ordinary
/// version suffixes like `-1.0`, `_V2.3`, ` 2.0` and arch-ish tails like
/// `.2.5.3.x64`.
fn version_boundary(bytes: &[u8]) -> Option<usize> {
    (0..bytes.len())
        .find(|&i| is_sep(bytes[i]) && version_suffix(&bytes[i + 1..]))
}

fn version_suffix(rest: &[u8]) -> bool {
    let rest = match rest.first() {
        Some(b) if b.eq_ignore_ascii_case(&b'v') => &rest[1..],
        _ => rest,
    };
    match rest {
        [d] => d.is_ascii_digit(),
        [d, next, ..] => {
            d.is_ascii_digit()
                && (matches!(next, b'.' | b'_')
                    || next.is_ascii_digit()
                    || matches!(next.to_ascii_lowercase(), b'x' | b'b' | b'a'))
        }
        [] => false,
    }
}

/// Separator followed by a bare digit block at the very end of the string,
/// e.g. a build number like `FanControl_243`. Also fires on short suffixes
/// like `tinyMediaManager-person-5`, where the `-5` may well be part of the
/// name; that behavior is long-standing and callers rely on it.
fn tail_number_boundary(bytes: &[u8]) -> Option<usize> {
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == bytes.len() || start == 0 {
        return None;
    }
    is_sep(bytes[start - 1]).then(|| start - 1)
}

/// Version glued directly onto the name, no separator: a position right after
/// a letter where the rest is an optional `v`, a digit, and that digit is
/// followed by a dot, underscore, or another digit. The two-character
/// requirement keeps model numbers intact: `Proxmark3GUI` has a lone `3`
/// followed by a letter and is not split, while `FastCopy5.8.1` and `SE4011`
/// are.
fn embedded_version_boundary(bytes: &[u8]) -> Option<usize> {
    (1..bytes.len()).find(|&i| {
        bytes[i - 1].is_ascii_alphabetic() && embedded_version(&bytes[i..])
    })
}

fn embedded_version(rest: &[u8]) -> bool {
    let rest = match rest.first() {
        Some(b) if b.eq_ignore_ascii_case(&b'v') => &rest[1..],
        _ => rest,
    };
    matches!(rest, [d, next, ..]
        if d.is_ascii_digit() && (matches!(next, b'.' | b'_') || next.is_ascii_digit()))
}

fn starts_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len()
        && haystack
            .iter()
            .zip(needle)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}
