use lasso::algorithms::{fan, polygon};
use lasso::path::LassoPath;
use lasso::{Point, Selection};
use std::time::Instant;

// Random-walk trace like the progressive generator a chart demo would plot.
fn build_trace(n: usize) -> Vec<Point> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut y = 0.0f64;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        state ^= state << 13; state ^= state >> 7; state ^= state << 17;
        let r = (state >> 11) as f64 / (1u64 << 53) as f64;
        y += r - 0.5;
        out.push(Point::new(i as f64, y));
    }
    out
}

// Circle-ish lasso around the middle of the trace.
fn build_lasso(n: usize, vertices: usize) -> Vec<Point> {
    let cx = n as f64 * 0.5; let rx = n as f64 * 0.25; let ry = 10.0;
    (0..vertices).map(|k| {
        let a = k as f64 / vertices as f64 * std::f64::consts::TAU;
        Point::new(cx + rx * a.cos(), ry * a.sin())
    }).collect()
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 10_000usize;
    let mut vertices = 400usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--points=") { if let Ok(v)=val.parse() { points=v; } }
        else if let Some(val)=a.strip_prefix("--vertices=") { if let Ok(v)=val.parse() { vertices=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let data = build_trace(points);
    let lasso = build_lasso(points, vertices);

    // Drag: one pass per added vertex, the worst case for the debounce.
    let mut path = LassoPath::new();
    let mut sel = Selection::new(data.len());
    let mut times_ms: Vec<f64> = Vec::with_capacity(vertices);
    for &v in &lasso {
        path.add_vertex(v);
        let t0 = Instant::now();
        let _ = fan::evaluate_path(&data, &mut path, &mut sel);
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p99 = percentile(&times_ms, 0.99);

    let t0 = Instant::now();
    let (poly_sel, pass) = polygon::evaluate_polygon(&data, &lasso);
    let poly_ms = t0.elapsed().as_secs_f64() * 1000.0;

    println!("points={} vertices={} fan_selected={} fan_median_ms={:.4} fan_p99_ms={:.4} polygon_candidates={} polygon_selected={} polygon_ms={:.3}",
        points, vertices, sel.count(), med, p99, pass.candidates, poly_sel.count(), poly_ms);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
