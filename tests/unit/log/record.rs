use super::*;

fn rec(frame: u64, x: i32, y: i32, w: i32, h: i32, angle: i32) -> LogRecord {
    LogRecord {
        frame: FrameIndex(frame),
        x,
        y,
        width: w,
        height: h,
        angle,
    }
}

#[test]
fn display_is_bare_comma_separated_integers() {
    assert_eq!(rec(1, 5, 5, 100, 100, 12).to_string(), "1,5,5,100,100,12");
    assert_eq!(rec(0, -3, 7, 10, 10, -350).to_string(), "0,-3,7,10,10,-350");
}

#[test]
fn parse_accepts_windows_line_endings_and_spaces() {
    let r = LogRecord::parse_line(" 4, 10 ,-2,50,60,24\r", 1).unwrap();
    assert_eq!(r, rec(4, 10, -2, 50, 60, 24));
}

#[test]
fn parse_reports_line_number_and_field() {
    let err = LogRecord::parse_line("1,2,3,4,5", 7).unwrap_err();
    assert!(err.to_string().contains("line 7"));
    assert!(err.to_string().contains("expected 6 fields"));

    let err = LogRecord::parse_line("1,2,3,4,5,x", 2).unwrap_err();
    assert!(err.to_string().contains("angle"));

    assert!(LogRecord::parse_line("-1,2,3,4,5,6", 1).is_err());
}

#[test]
fn parse_log_skips_blank_lines_and_keeps_duplicates() {
    let text = "1,5,5,100,100,12\n\n1,6,6,100,100,12\n2,7,7,100,100,0\n";
    let recs = parse_log(text).unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0].frame, recs[1].frame);
}
