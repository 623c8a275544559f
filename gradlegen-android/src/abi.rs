//! Known Android ABIs and the flavor architecture each one maps to.

/// `(abi, architecture)` pairs, in the order flavors are created by default.
pub const KNOWN_ABIS: &[(&str, &str)] = &[
    ("armeabi", "arm"),
    ("armeabi-v7a", "arm7"),
    ("arm64-v8a", "arm8"),
    ("x86", "x86"),
    ("x86-64", "x86_64"),
    ("mips", "mips"),
    ("mips-64", "mips64"),
];

/// Flavor architecture for a known ABI.
pub fn default_architecture(abi: &str) -> Option<&'static str> {
    KNOWN_ABIS
        .iter()
        .find(|(known, _)| *known == abi)
        .map(|(_, arch)| *arch)
}

/// Every known ABI.
pub fn default_supported_abis() -> Vec<String> {
    KNOWN_ABIS.iter().map(|(abi, _)| abi.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_architecture() {
        assert_eq!(default_architecture("armeabi-v7a"), Some("arm7"));
        assert_eq!(default_architecture("x86-64"), Some("x86_64"));
        assert_eq!(default_architecture("riscv64"), None);
    }

    #[test]
    fn test_default_supported_abis() {
        let abis = default_supported_abis();
        assert_eq!(abis.len(), KNOWN_ABIS.len());
        assert_eq!(abis.first().map(String::as_str), Some("armeabi"));
    }
}
