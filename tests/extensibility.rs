use pen_factory::{
    BusinessLogic, Pen, PenFactory,
    application::run_pen_workshop,
    factories::{BallpointPenManufacturer, FeatherPenManufacturer},
};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct GelPen;

impl Pen for GelPen {
    fn label(&self) -> &'static str {
        "GelPen"
    }
}

struct GelPenManufacturer;

impl PenFactory for GelPenManufacturer {
    fn make_product(&self) -> Box<dyn Pen> {
        Box::new(GelPen)
    }
}

fn render(manufacturers: &[&dyn PenFactory]) -> String {
    let mut out = Vec::new();
    for manufacturer in manufacturers {
        manufacturer.execute_business_logic_into(&mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn new_pair_plugs_into_template() {
    assert_eq!(render(&[&GelPenManufacturer]), "GelPen\n");
}

#[test]
fn new_pair_leaves_existing_manufacturers_alone() {
    let output = render(&[
        &BallpointPenManufacturer,
        &FeatherPenManufacturer,
        &GelPenManufacturer,
    ]);
    assert_eq!(output, "BallpointPen\nFeatherPen\nGelPen\n");
}

#[test]
fn driver_output_is_unchanged() {
    let mut out = Vec::new();
    run_pen_workshop(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "BallpointPen\nFeatherPen\n");
}
