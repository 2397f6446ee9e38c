use super::*;

fn pt(frame: f64, x: f64, y: f64, angle: f64) -> TrackPoint {
    TrackPoint {
        frame,
        x,
        y,
        width: 100.0,
        height: 50.0,
        angle,
    }
}

#[test]
fn segments_pair_consecutive_samples() {
    let segs = segments(&[pt(0.0, 0.0, 0.0, 0.0), pt(10.0, 5.0, 5.0, 12.0), pt(20.0, 9.0, 1.0, 24.0)]);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].frame_start, 0.0);
    assert_eq!(segs[0].frame_end, 9.0);
    assert_eq!(segs[1].id, 1);
    assert_eq!(segs[1].rotation, (12.0, 24.0));
    assert!(segments(&[pt(0.0, 0.0, 0.0, 0.0)]).is_empty());
}

#[test]
fn editor_space_centres_and_rescales() {
    let mut opts = ExoOptions::new(1920, 1080, 30);
    let segs = segments(&[pt(0.0, 960.0, 540.0, 0.0), pt(30.0, 1920.0, 0.0, 0.0)]);

    let plain = to_editor_space(&segs, &opts);
    assert_eq!(plain[0].pos_x, (0.0, 960.0));
    assert_eq!(plain[0].pos_y, (0.0, -540.0));
    assert_eq!(plain[0].frame_start, 1.0);
    assert_eq!(plain[0].frame_end, 30.0);

    opts.new_width = Some(960);
    opts.new_height = Some(540);
    opts.new_fps = Some(60);
    let scaled = to_editor_space(&segs, &opts);
    assert_eq!(scaled[0].pos_x, (0.0, 480.0));
    assert_eq!(scaled[0].pos_y, (0.0, -270.0));
    assert_eq!(scaled[0].size_x, (50.0, 50.0));
    assert_eq!(scaled[0].size_y, (25.0, 25.0));
    assert_eq!(scaled[0].frame_end, 59.0);
}

#[test]
fn rendered_text_has_header_and_chained_objects() {
    let opts = ExoOptions::new(640, 480, 30);
    let segs = to_editor_space(
        &segments(&[
            pt(0.0, 320.0, 240.0, 0.0),
            pt(10.0, 330.0, 240.0, 6.5),
            pt(20.0, 340.0, 250.0, 13.0),
        ]),
        &opts,
    );
    let text = render_exo(&segs, &opts).unwrap();

    assert!(text.starts_with("[exedit]\nwidth=640\nheight=480\nrate=30\nscale=1\nlength=20\n"));
    assert!(text.contains("[0]\nstart=1\nend=10\n"));
    assert!(text.contains("[0]\nstart=1\nend=10\nlayer=1\noverlay=1\ncamera=0\n\n[0.0]\n"));
    assert!(text.contains("[1]\nstart=11\nend=20\nlayer=1\noverlay=1\ncamera=0\nchain=1\n"));
    assert!(text.contains("X=0.0,10.0,1\n"));
    assert!(text.contains("Rotation=0.0,6.5,1\n"));
    assert!(text.contains("[1.2]\n_name=Standard drawing\n"));
}

#[test]
fn render_rejects_empty_tracks_and_zero_fps() {
    let opts = ExoOptions::new(640, 480, 30);
    assert!(render_exo(&[], &opts).is_err());

    let segs = segments(&[pt(0.0, 0.0, 0.0, 0.0), pt(1.0, 0.0, 0.0, 0.0)]);
    assert!(render_exo(&segs, &ExoOptions::new(640, 480, 0)).is_err());
}
