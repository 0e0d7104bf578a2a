use engine::{generate, CurveSpec, FieldMode, GenerateRequest, SampleDomain};

fn main() {
    let real = GenerateRequest {
        spec: CurveSpec::weierstrass(-1.0, 1.0),
        mode: FieldMode::Real,
        domain: SampleDomain::default(),
    };
    let result = generate(&real).expect("real generation");
    println!(
        "y² = x³ - x + 1 over ℝ: {} affine points, {} homogeneous, {} on the sphere",
        result.points_2d.len(),
        result.homogeneous_points_2d.len(),
        result.sphere.len()
    );

    let modular = GenerateRequest {
        spec: CurveSpec::weierstrass(-1.0, 1.0),
        mode: FieldMode::Modulo(97),
        domain: SampleDomain::default(),
    };
    let result = generate(&modular).expect("modulo generation");
    println!(
        "y² = x³ - x + 1 over Z/97Z: {} points, {} on the torus",
        result.points_2d.len(),
        result.torus.len()
    );

    let json = serde_json::to_string(&result).expect("serialize result");
    println!("wire bundle: {} bytes", json.len());
}
