// Segment order: top, upper-right, lower-right, bottom, lower-left,
// upper-left, middle.
pub const DIGIT_SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],     // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],    // 2
    [true, true, true, true, false, false, true],    // 3
    [false, true, true, false, false, true, true],   // 4
    [true, false, true, true, false, true, true],    // 5
    [true, false, true, true, true, true, true],     // 6
    [true, true, true, false, false, false, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, true, false, true, true],     // 9
];

/// Anything outside 0-9 renders as a blank cell.
pub fn segments_for(digit: usize) -> [bool; 7] {
    DIGIT_SEGMENTS.get(digit).copied().unwrap_or([false; 7])
}
