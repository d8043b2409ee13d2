//! Static width tables for the standard PDF fonts.
//!
//! Used when the Thai TrueType files are not available. Widths are in
//! thousandths of an em, taken from the Adobe core-font AFM files. Tables
//! cover ASCII 0x20..=0x7E; index = byte - 32. Text is WinAnsi-encoded
//! before measuring, so anything outside Latin-1 has already become `?`.

use crate::form::Weight;

/// Character-width table for one standard Type 1 font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct StandardFontMetrics {
    pub base_font: &'static str,
    widths: [u16; 95],
    /// Fallback for Latin-1 bytes above 0x7E.
    pub default_width: u16,
    pub ascent: u16,
}

impl StandardFontMetrics {
    /// Width of WinAnsi-encoded `bytes` in thousandths of an em.
    pub fn measure(&self, bytes: &[u8]) -> f32 {
        bytes
            .iter()
            .map(|&b| {
                if (32..=126).contains(&b) {
                    self.widths[(b - 32) as usize] as f32
                } else {
                    self.default_width as f32
                }
            })
            .sum()
    }
}

/// Encodes `text` for a WinAnsi font. Characters outside Latin-1 become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ 0x20..=0x7E => code as u8,
            code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA: StandardFontMetrics = StandardFontMetrics {
    base_font: "Helvetica",
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    default_width: 556,
    ascent: 718,
};

static HELVETICA_BOLD: StandardFontMetrics = StandardFontMetrics {
    base_font: "Helvetica-Bold",
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    default_width: 556,
    ascent: 718,
};

/// Returns the standard font metrics for a weight.
pub fn get_metrics(weight: Weight) -> &'static StandardFontMetrics {
    match weight {
        Weight::Regular => &HELVETICA,
        Weight::Bold => &HELVETICA_BOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_returns_zero() {
        assert_eq!(get_metrics(Weight::Regular).measure(b""), 0.0);
    }

    #[test]
    fn test_measure_ascii() {
        let m = get_metrics(Weight::Regular);
        // H + i
        assert_eq!(m.measure(b"Hi"), 722.0 + 222.0);
        assert_eq!(m.measure(b"1 / 2"), 556.0 + 278.0 + 278.0 + 278.0 + 556.0);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = b"EMPLOYMENT APPLICATION";
        assert!(get_metrics(Weight::Bold).measure(text) >= get_metrics(Weight::Regular).measure(text));
        let lower = b"personal record";
        assert!(get_metrics(Weight::Bold).measure(lower) > get_metrics(Weight::Regular).measure(lower));
    }

    #[test]
    fn test_encode_win_ansi_replaces_thai() {
        assert_eq!(encode_win_ansi("Age อายุ"), b"Age ????".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn test_latin1_falls_back_to_default_width() {
        let m = get_metrics(Weight::Regular);
        assert_eq!(m.measure(&[0xE9]), m.default_width as f32);
    }
}
