use super::config::PLACEHOLDER_BASE_PATH;

/// `/api/placeholder/{width}/{height}?text={label}`; подпись кодируется.
/// URI только отображается, приложение его не запрашивает.
pub fn placeholder_uri(width: u32, height: u32, label: &str) -> String {
    format!(
        "{}/{}/{}?text={}",
        PLACEHOLDER_BASE_PATH,
        width,
        height,
        urlencoding::encode(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_uri() {
        assert_eq!(
            placeholder_uri(150, 150, "Zelda"),
            "/api/placeholder/150/150?text=Zelda"
        );
        assert_eq!(
            placeholder_uri(150, 150, "Switch Lite"),
            "/api/placeholder/150/150?text=Switch%20Lite"
        );
    }
}
