use flipdial_core::transform::RotationAngle;

/// Degrees between notch marks.
const NOTCH_STEP: u16 = 30;

/// A rotary knob for `0..=360` degrees: 0 at the top, clockwise.
///
/// Click or drag anywhere on the face to point the knob at the cursor.
pub fn dial(ui: &mut egui::Ui, angle: &mut RotationAngle, diameter: f32) -> egui::Response {
    let (rect, mut response) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::click_and_drag());

    if ui.is_enabled() && response.is_pointer_button_down_on() {
        if let Some(pos) = response.interact_pointer_pos() {
            let picked = angle_at(rect.center(), pos);
            if picked != *angle {
                *angle = picked;
                response.mark_changed();
            }
        }
    }

    if ui.is_rect_visible(rect) {
        paint(ui, rect, &response, *angle);
    }
    response
}

fn angle_at(center: egui::Pos2, pos: egui::Pos2) -> RotationAngle {
    let v = pos - center;
    let degrees = v.x.atan2(-v.y).to_degrees().rem_euclid(360.0);
    RotationAngle::new(degrees.round() as i32)
}

/// Unit vector for `degrees` in screen space (y down, 0 at the top).
fn direction(degrees: f32) -> egui::Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    egui::vec2(sin, -cos)
}

fn paint(ui: &egui::Ui, rect: egui::Rect, response: &egui::Response, angle: RotationAngle) {
    let visuals = ui.style().interact(response);
    let painter = ui.painter();
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0 - 2.0;

    painter.circle(center, radius, visuals.bg_fill, visuals.bg_stroke);

    let notch_stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    for notch in (0..360u16).step_by(usize::from(NOTCH_STEP)) {
        let dir = direction(f32::from(notch));
        painter.line_segment(
            [center + dir * (radius - 6.0), center + dir * radius],
            notch_stroke,
        );
    }

    let dir = direction(f32::from(angle.degrees()));
    painter.line_segment(
        [center, center + dir * (radius - 10.0)],
        egui::Stroke::new(2.0, visuals.fg_stroke.color),
    );
    painter.circle_filled(center + dir * (radius - 10.0), 4.0, visuals.fg_stroke.color);
}
