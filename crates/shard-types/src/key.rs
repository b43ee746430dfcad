/// File extension carried over from an object key.
///
/// Leading `.` characters are stripped first, so a key such as `"...hidden"`
/// is treated as having the base name `hidden` and no extension. The
/// extension is taken from the final path element only and includes the dot:
/// `"reports/q3.csv"` yields `".csv"`, `"dir.d/file"` yields `""`.
pub fn extension(key: &str) -> &str {
    let trimmed = key.trim_start_matches('.');
    let name_start = trimmed
        .rfind(std::path::is_separator)
        .map_or(0, |i| i + 1);
    let name = &trimmed[name_start..];
    match name.rfind('.') {
        Some(i) => &name[i..],
        None => "",
    }
}
