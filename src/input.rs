use egui::Pos2;

/// Maps a device-space pointer position onto grid coordinates relative to the
/// canvas' top-left corner. Positions left of or above the canvas go negative.
pub fn to_grid(pointer: Pos2, canvas_origin: Pos2, cell_size: f32) -> (i64, i64) {
    let cell_size = if cell_size > 0.0 { cell_size } else { 1.0 };
    let x = ((pointer.x - canvas_origin.x) / cell_size).floor() as i64;
    let y = ((pointer.y - canvas_origin.y) / cell_size).floor() as i64;
    (x, y)
}

/// Whether a pointer sample paints: the primary button is held and the pointer
/// moved while over the canvas, wherever the press started.
pub fn pointer_paints(hovered: bool, primary_down: bool, pointer_delta: egui::Vec2) -> bool {
    hovered && primary_down && pointer_delta != egui::Vec2::ZERO
}

/// Positions of every touch that moved this frame.
pub fn touch_moves(events: &[egui::Event]) -> Vec<Pos2> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Touch {
                phase: egui::TouchPhase::Move,
                pos,
                ..
            } => Some(*pos),
            _ => None,
        })
        .collect()
}
