//! Counts the scans and sampled points in a ptx file.

use ptx::{Point, Reader, sink::Sampled};

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Must provide a path to a ptx file");
    let mut reader = Reader::from_path(path).expect("Unable to open reader");
    let mut infos = Vec::new();
    let scans = reader
        .read_scans(|info| {
            infos.push(*info);
            Sampled::new(Vec::<Point>::new())
        })
        .expect("Unable to read scans");
    println!("Number of scans: {}", scans.len());
    for (i, (info, points)) in infos.iter().zip(&scans).enumerate() {
        println!(
            "Scan {}: {} of {} points sampled",
            i,
            points.get_ref().len(),
            info.dimensions.len()
        );
    }
    if let Some(ptx::End::Malformed { line }) = reader.end() {
        println!("Stopped at a malformed header on line {}", line);
    }
}
