use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

/// 获取当前 UTC 时间戳（秒）
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Per-process random tag, fixed for the lifetime of the process.
fn process_tag() -> &'static [u8; 5] {
    static TAG: OnceLock<[u8; 5]> = OnceLock::new();
    TAG.get_or_init(rand::random)
}

/// Counter seeded randomly on first use; only the low 24 bits are used.
fn next_counter() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    COUNTER
        .get_or_init(|| AtomicU32::new(rand::random::<u32>() & 0x00FF_FFFF))
        .fetch_add(1, Ordering::Relaxed)
        & 0x00FF_FFFF
}

/// Generate the 12 raw bytes of a document identifier.
///
/// Layout:
///   - 4 bytes: Unix seconds, big endian
///   - 5 bytes: per-process random tag
///   - 3 bytes: incrementing counter, big endian
///
/// Leading with the timestamp keeps the natural key order close to
/// insertion order.
pub fn object_id_bytes() -> [u8; 12] {
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&(now_secs() as u32).to_be_bytes());
    bytes[4..9].copy_from_slice(process_tag());
    bytes[9..].copy_from_slice(&next_counter().to_be_bytes()[1..]);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_bytes_share_process_tag() {
        let a = object_id_bytes();
        let b = object_id_bytes();
        assert_eq!(a[4..9], b[4..9]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_id_bytes_lead_with_timestamp() {
        let before = now_secs() as u32;
        let bytes = object_id_bytes();
        let after = now_secs() as u32;
        let ts = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        assert!(ts >= before && ts <= after);
    }
}
