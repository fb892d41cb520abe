//! 分段算法测试：精确区间、余数吸收、封顶与空资源等边界，以及覆盖律。

use crate::partition::{ByteRange, partition_ranges};

/// 校验一组区间恰好覆盖 `[0, total)`：连续、不重叠、序号升序 = 偏移升序。
fn assert_exact_cover(ranges: &[ByteRange], total: u64) {
    assert!(!ranges.is_empty(), "至少应有一段");

    let mut expected_start = 0u64;
    for (i, r) in ranges.iter().enumerate() {
        assert_eq!(r.index, i, "序号应升序连续");
        assert_eq!(r.start, expected_start, "各段应首尾相接");
        assert!(r.end >= r.start);
        expected_start = r.end;
    }
    assert_eq!(ranges.last().unwrap().end, total, "最后一段应到达总大小");

    let sum: u64 = ranges.iter().map(|r| r.len()).sum();
    assert_eq!(sum, total, "段长之和应等于总大小");
}

#[test]
fn million_bytes_four_segments_exact_quarters() {
    let ranges = partition_ranges(1_000_000, 4);

    assert_eq!(ranges.len(), 4);
    assert_eq!((ranges[0].start, ranges[0].end), (0, 250_000));
    assert_eq!((ranges[1].start, ranges[1].end), (250_000, 500_000));
    assert_eq!((ranges[2].start, ranges[2].end), (500_000, 750_000));
    assert_eq!((ranges[3].start, ranges[3].end), (750_000, 1_000_000));
    assert_exact_cover(&ranges, 1_000_000);
}

#[test]
fn seven_bytes_three_segments_last_absorbs_remainder() {
    let ranges = partition_ranges(7, 3);

    let lens: Vec<u64> = ranges.iter().map(|r| r.len()).collect();
    assert_eq!(lens, vec![2, 2, 3], "只有最后一段更长");
    assert_exact_cover(&ranges, 7);
}

#[test]
fn single_segment_spans_whole_resource() {
    let ranges = partition_ranges(12_345, 1);

    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].start, ranges[0].end), (0, 12_345));
}

#[test]
fn segment_count_capped_by_total_size() {
    // 2 字节切 4 段：只能出 2 段，绝不产生零长度段
    let ranges = partition_ranges(2, 4);

    assert_eq!(ranges.len(), 2);
    assert!(ranges.iter().all(|r| r.len() == 1));
    assert_exact_cover(&ranges, 2);
}

#[test]
fn zero_total_size_yields_single_empty_range() {
    let ranges = partition_ranges(0, 4);

    assert_eq!(ranges.len(), 1);
    assert!(ranges[0].is_empty());
    assert_eq!(ranges[0].start, 0);
}

#[test]
fn zero_segment_count_clamped_to_one() {
    let ranges = partition_ranges(10, 0);

    assert_eq!(ranges.len(), 1);
    assert_exact_cover(&ranges, 10);
}

/// 覆盖律：任意 total 与 count 组合下，段长求和等于 total、
/// 首尾相接、段数 = min(count, max(total, 1))，且除最后一段外等长。
#[test]
fn partition_laws_hold_across_grid() {
    let totals = [1u64, 2, 3, 5, 7, 64, 100, 1_001, 999_983];
    let counts = [1usize, 2, 3, 4, 8, 16, 1_000];

    for &total in &totals {
        for &count in &counts {
            let ranges = partition_ranges(total, count);
            assert_exact_cover(&ranges, total);

            let expected = (count as u64).min(total) as usize;
            assert_eq!(ranges.len(), expected, "total={total} count={count}");

            let base = total / expected as u64;
            for r in &ranges[..ranges.len() - 1] {
                assert_eq!(r.len(), base, "除最后一段外等长");
            }
            assert!(ranges.last().unwrap().len() >= base, "余数由最后一段吸收");
        }
    }
}

#[test]
fn range_header_value_uses_inclusive_bounds() {
    let r = ByteRange {
        index: 0,
        start: 250_000,
        end: 500_000,
    };
    assert_eq!(r.header_value(), "bytes=250000-499999");
}
