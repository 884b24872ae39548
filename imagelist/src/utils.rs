/// Canonical 36-character hyphenated rendering of a 16-byte build id.
pub fn format_build_id(id: &[u8; 16]) -> String {
    let hex = id.iter().map(|x| format!("{x:02x}")).collect::<String>();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    )
}

#[cfg(test)]
mod tests {
    use super::format_build_id;

    #[test]
    fn canonical_hyphenated_form() {
        let id = [
            0x9b, 0xf6, 0x7e, 0x55, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99,
            0xaa, 0xbb,
        ];
        let text = format_build_id(&id);
        assert_eq!(text.len(), 36);
        assert_eq!(text, "9bf67e55-0011-2233-4455-66778899aabb");
    }
}
