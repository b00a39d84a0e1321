//! Static Polymorphism over a Closed Shape Set
//!
//! Every shape is drawn through one generic visitor case; no trait objects.

use tola_variant::prelude::*;

trait Draw {
    fn draw(&self) -> String;
}

#[derive(Debug, Default)]
struct Circle {
    radius: i32,
}

#[derive(Debug)]
struct Square {
    size: i32,
}

#[derive(Debug)]
struct Rectangle {
    width: i32,
    height: i32,
}

impl Draw for Circle {
    fn draw(&self) -> String {
        format!("Drawing circle r: {}", self.radius)
    }
}

impl Draw for Square {
    fn draw(&self) -> String {
        format!("Drawing square s: {}", self.size)
    }
}

impl Draw for Rectangle {
    fn draw(&self) -> String {
        format!("Drawing rect w: {}, h: {}", self.width, self.height)
    }
}

#[derive(Debug, Variant)]
enum Shape {
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
}

struct Drawer;

impl<S: Draw> Visitor<S> for Drawer {
    type Output = String;

    fn visit(&mut self, shape: &S) -> String {
        shape.draw()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Static Polymorphism ===\n");

    let shapes = vec![
        Shape::from(Circle { radius: 10 }),
        Shape::from(Square { size: 70 }),
        Shape::from(Circle { radius: 30 }),
        Shape::from(Rectangle { width: 100, height: 200 }),
    ];

    for shape in &shapes {
        println!("  [{}] {}", shape.alternative_name(), visit(shape, &mut Drawer));
    }

    let circles = shapes.iter().filter(|s| s.holds::<Circle>()).count();
    assert_eq!(circles, 2);
    assert_eq!(visit(&shapes[3], &mut Drawer), "Drawing rect w: 100, h: 200");

    println!("\n=== SUCCESS ===");
}
