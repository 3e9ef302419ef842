use lamp_render::QuadBatch;

use crate::world::GameState;

/// Queues one quad per entity, back to front. The pointer is pinned to the
/// world position under the cursor so it follows the camera.
pub fn draw_world(state: &GameState, batch: &mut QuadBatch) {
    let platform = &state.platform;
    batch.draw_quad(&platform.sprite, platform.pos, platform.size);

    let door = &state.door;
    batch.draw_quad(door.sprite(), door.pos, door.size);

    let light = &state.light;
    batch.draw_quad(light.sprite(), light.pos, light.size);

    let enemy = &state.enemy;
    batch.draw_quad(enemy.sprite(), enemy.pos, enemy.size);

    let player = &state.player;
    batch.draw_quad(player.sprite(), player.pos, player.size);

    let pointer = &state.pointer;
    batch.draw_quad(
        pointer.sprite(player),
        pointer.world_position(&state.camera),
        pointer.size,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas;
    use glam::Vec2;
    use lamp_render::batch::VERTICES_PER_QUAD;
    use lamp_render::SpriteVertex;

    const QUADS_PER_FRAME: usize = 6;

    fn quad(batch: &QuadBatch, index: usize) -> &[SpriteVertex] {
        let start = index * VERTICES_PER_QUAD;
        &batch.vertices()[start..start + VERTICES_PER_QUAD]
    }

    fn center(vertices: &[SpriteVertex]) -> Vec2 {
        let bottom_left = Vec2::from(vertices[0].position);
        let top_right = Vec2::from(vertices[5].position);
        (bottom_left + top_right) / 2.0
    }

    #[test]
    fn one_quad_per_entity() {
        let state = GameState::new(1200.0 / 700.0);
        let mut batch = QuadBatch::new();
        draw_world(&state, &mut batch);
        assert_eq!(batch.quad_count(), QUADS_PER_FRAME);
        assert_eq!(batch.len(), QUADS_PER_FRAME * VERTICES_PER_QUAD);
    }

    #[test]
    fn platform_is_drawn_first_and_pointer_last() {
        let mut state = GameState::new(1200.0 / 700.0);
        state.pointer.pos = Vec2::new(1.0, -1.0);
        let mut batch = QuadBatch::new();
        draw_world(&state, &mut batch);

        let platform = quad(&batch, 0);
        assert_eq!(Vec2::from(platform[0].tex_coords), atlas::PLATFORM.min_uv);
        assert_eq!(center(platform), Vec2::new(15.0, 0.25));

        // Camera at (6, 3.5) spanning 12x7: NDC (1, -1) is world (12, 0).
        let pointer = quad(&batch, QUADS_PER_FRAME - 1);
        let at = center(pointer);
        assert!((at - Vec2::new(12.0, 0.0)).length() < 1e-4, "pointer at {at}");
    }

    #[test]
    fn enemy_quad_uses_current_visual() {
        let mut state = GameState::new(1.0);
        let mut batch = QuadBatch::new();
        draw_world(&state, &mut batch);
        assert_eq!(
            Vec2::from(quad(&batch, 3)[0].tex_coords),
            atlas::ENEMY_STAND.min_uv
        );

        state.step(5.0);
        batch.clear();
        draw_world(&state, &mut batch);
        assert_eq!(
            Vec2::from(quad(&batch, 3)[0].tex_coords),
            atlas::ENEMY_WALK.min_uv
        );
    }

    #[test]
    fn player_quad_tracks_position() {
        let mut state = GameState::new(1.0);
        state.player.pos = Vec2::new(9.0, 2.0);
        let mut batch = QuadBatch::new();
        draw_world(&state, &mut batch);
        assert_eq!(center(quad(&batch, 4)), Vec2::new(9.0, 2.0));
    }
}
