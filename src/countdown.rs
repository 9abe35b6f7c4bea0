/// Formats the time left on a slide: `M:SS` above one minute, whole seconds otherwise.
pub fn format_remaining(remaining: f32) -> String {
    let remaining = remaining.max(0.0);
    if remaining > 60.0 {
        let minutes = (remaining / 60.0).floor() as u32;
        let seconds = (remaining % 60.0).floor() as u32;
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{}", remaining.floor() as u32)
    }
}
