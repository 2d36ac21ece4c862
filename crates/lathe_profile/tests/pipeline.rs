use image::{GrayImage, Luma};
use lathe_profile::{io::load_profile, Pipeline, ProfileError, RevolveOptions, RevolvedMesh};

/// A stylised pawn: round head, narrow neck, flared base, dark on white.
fn pawn_image() -> GrayImage {
    let (w, h) = (240u32, 320u32);
    let cx = f64::from(w / 2);
    let mut img = GrayImage::from_pixel(w, h, Luma([250u8]));

    for y in 0..h {
        for x in 0..w {
            let dx = f64::from(x) - cx;
            let fy = f64::from(y);
            let head = dx * dx + (fy - 70.0).powi(2) <= 40.0 * 40.0;
            let body = (100.0..260.0).contains(&fy) && dx.abs() <= 20.0 + (fy - 100.0) * 0.3;
            let base = (260.0..300.0).contains(&fy) && dx.abs() <= 90.0;
            if head || body || base {
                img.put_pixel(x, y, Luma([20u8]));
            }
        }
    }
    img
}

#[test]
fn test_pawn_profile_file() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("pawn_outline_coords.txt");

    let pipeline = Pipeline::builder().build().expect("Should build pipeline");
    let profile = pipeline.process(&pawn_image()).expect("Should process successfully");
    profile.save_text(&path).expect("Should write profile");

    let text = std::fs::read_to_string(&path).expect("Should read back");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 500);
    assert_eq!(lines[0], "\t{0.000, 0.0000},");
    assert!(lines.iter().all(|l| l.starts_with("\t{") && l.ends_with("},")));
    assert!(lines[499].ends_with(", 1.0000},"));

    let rows = load_profile(&path).expect("Should parse profile");
    assert_eq!(rows.len(), 500);
    for pair in rows.windows(2) {
        assert!(pair[0].y < pair[1].y, "heights must ascend in the file");
    }

    // The base is the widest part and sits at the bottom of the image (y near 1).
    let widest = rows
        .iter()
        .copied()
        .fold(rows[0], |best, p| if p.x > best.x { p } else { best });
    assert!((widest.x - 0.4).abs() < 1e-3);
    assert!(widest.y > 0.8);

    let mesh = RevolvedMesh::from_profile(&rows, &RevolveOptions::default())
        .expect("Should revolve");
    assert_eq!(mesh.vertices.len(), 361 * 500);
    assert_eq!(mesh.triangle_count(), 360 * 499 * 2);
}

#[test]
fn test_same_input_same_bytes() {
    let pipeline = Pipeline::builder().sample_count(128).build().expect("Should build pipeline");
    let image = pawn_image();

    let first = pipeline.process(&image).expect("Should process successfully").to_text();
    let second = pipeline.process(&image).expect("Should process successfully").to_text();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_reports_image_error() {
    let pipeline = Pipeline::builder().build().expect("Should build pipeline");
    let result = pipeline.process_path("/nonexistent/pawn.png");
    assert!(matches!(result, Err(ProfileError::ImageLoad(_))));
}

#[test]
fn test_png_round_trip_through_disk() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("pawn.png");
    pawn_image().save(&path).expect("Should save png");

    let pipeline = Pipeline::builder().build().expect("Should build pipeline");
    let from_disk = pipeline.process_path(&path).expect("Should process file");
    let in_memory = pipeline.process(&pawn_image()).expect("Should process image");
    assert_eq!(from_disk, in_memory);
}
