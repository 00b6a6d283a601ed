//! Drawing to HPGL serialization

use hpglkit_core::{Drawing, Point};

use super::HpglCommand;

/// Builds the command stream for a drawing
///
/// Layout: `IN:;PA;`, then for every path a pen-up move to its first
/// point and one multi-point pen-down through the rest, then
/// `PU0,0;SP0;SP0;` to park the head and put the tool away.
#[derive(Debug, Clone, Copy, Default)]
pub struct HpglWriter;

impl HpglWriter {
    pub fn new() -> Self {
        Self
    }

    /// The command sequence, without separators
    pub fn commands(&self, drawing: &Drawing) -> Vec<HpglCommand> {
        let mut commands = Vec::with_capacity(drawing.len() * 2 + 5);
        commands.push(HpglCommand::Initialize);
        commands.push(HpglCommand::PlotAbsolute);

        for path in drawing {
            let points = path.points();
            commands.push(HpglCommand::PenUp(Some(points[0])));
            commands.push(HpglCommand::PenDownMany(points[1..].to_vec()));
        }

        commands.push(HpglCommand::PenUp(Some(Point::ORIGIN)));
        commands.push(HpglCommand::SelectPen(0));
        commands.push(HpglCommand::SelectPen(0));
        commands
    }

    /// The complete `;`-terminated command stream
    pub fn write(&self, drawing: &Drawing) -> String {
        self.commands(drawing)
            .iter()
            .map(|command| format!("{};", command))
            .collect()
    }
}

/// Serialize a drawing to HPGL text
pub fn to_hpgl(drawing: &Drawing) -> String {
    HpglWriter::new().write(drawing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpglkit_core::Path;

    #[test]
    fn test_empty_drawing() {
        assert_eq!(to_hpgl(&Drawing::default()), "IN:;PA;PU0,0;SP0;SP0;");
    }

    #[test]
    fn test_paths_are_rounded() {
        let drawing = Drawing::new(vec![
            Path::new(vec![
                Point::new(0.4, 0.0),
                Point::new(10.5, 0.0),
                Point::new(10.0, 9.6),
            ])
            .unwrap(),
            Path::new(vec![Point::new(-5.0, -5.0), Point::new(-6.0, -7.0)]).unwrap(),
        ]);
        assert_eq!(
            to_hpgl(&drawing),
            "IN:;PA;PU0,0;PD11,0,10,10;PU-5,-5;PD-6,-7;PU0,0;SP0;SP0;"
        );
    }
}
