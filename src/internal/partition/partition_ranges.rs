//! 分段算法：均分后由最后一段吸收余数，保证恰好一段更长、绝不产生零长度段。

use super::structs::byte_range::ByteRange;

/// 把 `[0, total_size)` 切成至多 `segment_count` 段连续不重叠的区间。
///
/// - `base = total_size / count`，每段长 `base`，最后一段额外吸收 `total_size % count`；
/// - `segment_count` 会被钳到 `>= 1`，并被 `total_size` 封顶（段数不超过字节数）；
/// - `total_size == 0` 时返回单个空段，而不是报错。
pub fn partition_ranges(total_size: u64, segment_count: usize) -> Vec<ByteRange> {
    if total_size == 0 {
        return vec![ByteRange {
            index: 0,
            start: 0,
            end: 0,
        }];
    }

    let count = (segment_count.max(1) as u64).min(total_size);
    let base = total_size / count;

    let mut ranges = Vec::with_capacity(count as usize);
    for i in 0..count {
        let start = i * base;
        let end = if i == count - 1 {
            total_size
        } else {
            start + base
        };
        ranges.push(ByteRange {
            index: i as usize,
            start,
            end,
        });
    }
    ranges
}
