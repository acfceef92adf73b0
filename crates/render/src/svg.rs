//! Minimal SVG document model: the three drawable primitives the map needs
//! (circle, polyline, text) and a canvas that serializes them in insertion
//! order. Nothing here reorders drawables; layering is the composer's job.

use std::fmt;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Styling
// ============================================================================

/// A fill or stroke color: unset, a named color, or RGB/RGBA channels.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        opacity: f64,
    },
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgb { red, green, blue }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            opacity,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{name}"),
            Color::Rgb { red, green, blue } => write!(f, "rgb({red},{green},{blue})"),
            Color::Rgba {
                red,
                green,
                blue,
                opacity,
            } => write!(f, "rgba({red},{green},{blue},{opacity})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        };
        write!(f, "{s}")
    }
}

/// Path styling shared by all drawables. Attributes are emitted only when
/// set, always in the same order.
#[derive(Clone, Debug, Default)]
struct PathStyle {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    line_cap: Option<LineCap>,
    line_join: Option<LineJoin>,
}

impl PathStyle {
    fn write_attrs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.line_cap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

macro_rules! impl_path_style {
    ($name:ident) => {
        impl $name {
            pub fn fill(mut self, color: Color) -> Self {
                self.style.fill = Some(color);
                self
            }

            pub fn stroke(mut self, color: Color) -> Self {
                self.style.stroke = Some(color);
                self
            }

            pub fn stroke_width(mut self, width: f64) -> Self {
                self.style.stroke_width = Some(width);
                self
            }

            pub fn line_cap(mut self, cap: LineCap) -> Self {
                self.style.line_cap = Some(cap);
                self
            }

            pub fn line_join(mut self, join: LineJoin) -> Self {
                self.style.line_join = Some(join);
                self
            }
        }
    };
}

// ============================================================================
// Drawables
// ============================================================================

/// The single render capability shared by every drawable.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A `<circle>` element.
#[derive(Clone, Debug, Default)]
pub struct Circle {
    center: Point,
    radius: f64,
    style: PathStyle,
}

impl Circle {
    pub fn new() -> Self {
        Self {
            radius: 1.0,
            ..Self::default()
        }
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl_path_style!(Circle);

impl Render for Circle {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.style.write_attrs(f)?;
        write!(f, "/>")
    }
}

/// A `<polyline>` element.
#[derive(Clone, Debug, Default)]
pub struct Polyline {
    points: Vec<Point>,
    style: PathStyle,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next vertex.
    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }
}

impl_path_style!(Polyline);

impl Render for Polyline {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<polyline points=\"")?;
        let mut delimiter = "";
        for point in &self.points {
            write!(f, "{delimiter}{},{}", point.x, point.y)?;
            delimiter = " ";
        }
        write!(f, "\"")?;
        self.style.write_attrs(f)?;
        write!(f, "/>")
    }
}

/// A `<text>` element. Content is escaped at assignment, so the rendered
/// markup stays well formed whatever the label says.
#[derive(Clone, Debug, Default)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    content: String,
    style: PathStyle,
}

impl Text {
    pub fn new() -> Self {
        Self {
            font_size: 1,
            ..Self::default()
        }
    }

    /// Reference point (`x`/`y` attributes).
    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Displacement from the reference point (`dx`/`dy` attributes).
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Text content, escaped for embedding in markup.
    pub fn content(mut self, content: &str) -> Self {
        self.content = escape(content);
        self
    }
}

impl_path_style!(Text);

impl Render for Text {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<text")?;
        self.style.write_attrs(f)?;
        write!(
            f,
            " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{weight}\"")?;
        }
        write!(f, ">{}</text>", self.content)
    }
}

/// Escape the five XML-significant characters.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Document
// ============================================================================

/// An ordered canvas of drawables. Serializes via `Display` into a complete
/// SVG document, children in append order at one level of indentation.
#[derive(Default)]
pub struct Document {
    objects: Vec<Box<dyn Render>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Render + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">")?;
        for object in &self.objects {
            write!(f, "  ")?;
            object.render(f)?;
            writeln!(f)?;
        }
        write!(f, "</svg>")
    }
}
