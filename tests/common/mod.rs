#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Write an object file whose lines carry two metadata fields then x y z.
pub fn write_object(dir: &Path, name: &str, points: &[(f64, f64, f64)]) {
    let mut content = String::new();
    for (i, (x, y, z)) in points.iter().enumerate() {
        content.push_str(&format!("pt {} {} {} {}\n", i, x, y, z));
    }
    fs::create_dir_all(dir).expect("create object dir");
    fs::write(dir.join(name), content).expect("write object file");
}

/// A small directory with three objects across two labels.
pub fn write_sample_objects(dir: &Path) {
    write_object(dir, "label_1_object_1.txt", &[(0.0, 0.0, 0.0)]);
    write_object(dir, "label_1_object_2.txt", &[(1.0, 2.0, 3.0), (5.0, 6.0, 5.0)]);
    write_object(dir, "label_2_object_3.txt", &[(3.0, 4.0, 0.0)]);
}
