//! 扫描性质测试
//!
//! 枚举所有短序列，与朴素实现对照检查扫描结果

use ordscan_core::{
    Counted, Greater, IterCursor, IterEnd, IterRange, Less, Relation, IS_SORTED_UNTIL,
};

/// 朴素实现：逐对检查相邻元素
fn naive_until<R: Relation<u8>>(data: &[u8], relation: &R) -> usize {
    for i in 1..data.len() {
        if relation.holds(&data[i], &data[i - 1]) {
            return i;
        }
    }
    data.len()
}

/// 字母表 {0, 1, 2} 上长度不超过 `max_len` 的全部序列
fn all_sequences(max_len: usize) -> Vec<Vec<u8>> {
    let mut out = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for seq in &frontier {
            for symbol in 0..3u8 {
                let mut extended: Vec<u8> = seq.clone();
                extended.push(symbol);
                next.push(extended);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

// ===== 与朴素实现对照 =====

#[test]
fn test_matches_naive_ascending() {
    for seq in all_sequences(5) {
        let got = IS_SORTED_UNTIL.scan_range(&seq).index();
        assert_eq!(got, naive_until(&seq, &Less), "sequence {:?}", seq);
    }
}

#[test]
fn test_matches_naive_descending() {
    let desc = IS_SORTED_UNTIL.by(Greater);
    for seq in all_sequences(5) {
        let got = desc.scan_range(&seq).index();
        assert_eq!(got, naive_until(&seq, &Greater), "sequence {:?}", seq);
    }
}

// ===== 结果位置的性质 =====

#[test]
fn test_prefix_before_position_is_sorted() {
    for seq in all_sequences(5) {
        let pos = IS_SORTED_UNTIL.scan_range(&seq).index();
        assert!(seq[..pos].windows(2).all(|w| w[0] <= w[1]), "sequence {:?}", seq);
        if pos < seq.len() {
            assert!(pos >= 1);
            assert!(seq[pos] < seq[pos - 1], "sequence {:?}", seq);
        }
    }
}

#[test]
fn test_comparisons_never_exceed_len_minus_one() {
    for seq in all_sequences(5) {
        let counted = IS_SORTED_UNTIL.by(Counted::new(Less));
        let pos = counted.scan_range(&seq).index();
        let calls = counted.relation().calls();
        assert!(calls <= seq.len().saturating_sub(1), "sequence {:?}", seq);
        // 在位置 p 处停下恰好比较了 p 次；走到末尾则比较 n - 1 次
        let expected = if pos < seq.len() { pos } else { seq.len().saturating_sub(1) };
        assert_eq!(calls, expected, "sequence {:?}", seq);
    }
}

// ===== 游标形式一致性 =====

#[test]
fn test_iter_cursor_agrees_with_slice_cursor() {
    for seq in all_sequences(4) {
        let by_slice = IS_SORTED_UNTIL.scan_range(&seq).index();
        let by_iter = IS_SORTED_UNTIL
            .scan(IterCursor::new(seq.iter().copied()), IterEnd)
            .index();
        let by_range = IS_SORTED_UNTIL.scan_range(&IterRange(seq.iter())).index();
        assert_eq!(by_slice, by_iter, "sequence {:?}", seq);
        assert_eq!(by_slice, by_range, "sequence {:?}", seq);
    }
}

// ===== 文档场景 =====

#[test]
fn test_documented_scenarios() {
    assert_eq!(IS_SORTED_UNTIL.scan_range(&[1, 2, 3, 4]).index(), 4);
    assert_eq!(IS_SORTED_UNTIL.scan_range(&[1, 2, 0, 4]).index(), 2);
    assert_eq!(IS_SORTED_UNTIL.scan_range(&[5]).index(), 1);
    let empty: [i32; 0] = [];
    assert_eq!(IS_SORTED_UNTIL.scan_range(&empty).index(), 0);

    let greater = |a: &&i32, b: &&i32| a > b;
    assert_eq!(IS_SORTED_UNTIL.by(greater).scan_range(&[3, 1]).index(), 2);
    assert_eq!(IS_SORTED_UNTIL.by(greater).scan_range(&[1, 3]).index(), 1);
}
