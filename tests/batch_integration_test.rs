use std::path::Path;

use facecount::domain::model::FaceBounds;
use facecount::domain::ports::FaceDetector;
use facecount::{
    BatchEngine, BatchPipeline, CliConfig, FaceCountError, FaceCounter, LocalStorage,
};
use tempfile::TempDir;

struct FixedCountDetector {
    count: usize,
}

impl FaceDetector for FixedCountDetector {
    fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Vec<FaceBounds> {
        (0..self.count)
            .map(|i| FaceBounds {
                x: i as f64 * 40.0,
                y: 10.0,
                width: 32.0,
                height: 32.0,
                confidence: 4.2,
            })
            .collect()
    }
}

fn write_png(dir: &Path, name: &str) {
    image::RgbImage::new(48, 36).save(dir.join(name)).unwrap();
}

fn make_config(images_dir: &TempDir, output_dir: &TempDir, skip_unreadable: bool) -> CliConfig {
    CliConfig {
        images_dir: images_dir.path().to_str().unwrap().to_string(),
        model_path: "unused.bin".to_string(),
        output_path: output_dir.path().to_str().unwrap().to_string(),
        output_filename: "test_final output.csv".to_string(),
        skip_unreadable,
        verbose: false,
    }
}

fn run_batch(config: CliConfig, faces_per_image: usize) -> Result<String, FaceCountError> {
    let storage = LocalStorage::new(config.output_path.clone());
    let counter = FaceCounter::new(Box::new(FixedCountDetector {
        count: faces_per_image,
    }));
    let pipeline = BatchPipeline::new(storage, config, counter);
    BatchEngine::new(pipeline).run()
}

fn read_output(output_dir: &TempDir) -> String {
    std::fs::read_to_string(output_dir.path().join("test_final output.csv")).unwrap()
}

#[test]
fn end_to_end_one_row_per_file() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_png(images.path(), "a.png");
    write_png(images.path(), "b.png");
    write_png(images.path(), "c.png");

    let result = run_batch(make_config(&images, &output, false), 2);
    assert!(result.is_ok());

    let csv = read_output(&output);
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines[0], ",titles,cnts,time");
    assert_eq!(lines.len(), 4); // header + 3 rows

    // 0-based row index in the leading column, in enumeration order
    for (i, line) in lines[1..].iter().enumerate() {
        assert!(line.starts_with(&format!("{},", i)));
        let fields: Vec<_> = line.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[2], "2");
        assert!(fields[3].parse::<i64>().unwrap() > 0);
    }

    for name in ["a.png", "b.png", "c.png"] {
        assert!(csv.contains(name));
    }
}

#[test]
fn zero_face_images_report_zero() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_png(images.path(), "blank.png");

    run_batch(make_config(&images, &output, false), 0).unwrap();

    let csv = read_output(&output);
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("0,blank.png,0,"));
}

#[test]
fn empty_directory_yields_header_only() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    run_batch(make_config(&images, &output, false), 3).unwrap();

    assert_eq!(read_output(&output), ",titles,cnts,time\n");
}

#[test]
fn non_image_file_aborts_without_output() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_png(images.path(), "ok.png");
    std::fs::write(images.path().join("notes.txt"), b"plain text").unwrap();

    let err = run_batch(make_config(&images, &output, false), 1).unwrap_err();

    assert!(matches!(err, FaceCountError::DecodeError { .. }));
    assert!(!output.path().join("test_final output.csv").exists());
}

#[test]
fn skip_unreadable_continues_past_bad_files() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_png(images.path(), "one.png");
    write_png(images.path(), "two.png");
    std::fs::write(images.path().join("notes.txt"), b"plain text").unwrap();

    run_batch(make_config(&images, &output, true), 1).unwrap();

    let csv = read_output(&output);
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3); // header + 2 image rows
    assert!(!csv.contains("notes.txt"));
}

#[test]
fn reruns_over_unchanged_directory_are_byte_identical() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_png(images.path(), "a.png");
    write_png(images.path(), "b.png");

    run_batch(make_config(&images, &output, false), 1).unwrap();
    let first = std::fs::read(output.path().join("test_final output.csv")).unwrap();

    run_batch(make_config(&images, &output, false), 1).unwrap();
    let second = std::fs::read(output.path().join("test_final output.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reports_output_path_under_configured_directory() {
    let images = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_png(images.path(), "a.png");

    let output_path = run_batch(make_config(&images, &output, false), 1).unwrap();

    assert!(output_path.starts_with(output.path().to_str().unwrap()));
    assert!(output_path.ends_with("test_final output.csv"));
    assert!(Path::new(&output_path).exists());
}
