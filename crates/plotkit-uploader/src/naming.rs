//! Collision-avoiding filename bumping.

/// Produce the next candidate name for a taken filename.
///
/// `drawing` becomes `drawing(2)`, `drawing(2)` becomes `drawing(3)`,
/// and so on. Any extension-like suffix after the first `.` is
/// ignored; the machine-side extension is appended by the caller.
pub fn bump_filename(name: &str) -> String {
    let stem = name.split('.').next().unwrap_or(name);

    if let Some((base, counter)) = parse_counter(stem) {
        format!("{}({})", base, counter + 1)
    } else {
        format!("{}(2)", stem)
    }
}

/// Split `base(n)` into its base and counter, if the name ends in a
/// parenthetical number.
fn parse_counter(stem: &str) -> Option<(&str, u32)> {
    let rest = stem.strip_suffix(')')?;
    let open = rest.rfind('(')?;
    let counter: u32 = rest[open + 1..].parse().ok()?;
    Some((&rest[..open], counter))
}
