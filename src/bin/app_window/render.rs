//! 渲染相关逻辑

use neovia_gui::Canvas;

/// 将画布按最近邻缩放写入窗口缓冲区（0x00RRGGBB）
pub fn present_to_buffer(buffer: &mut [u32], buffer_width: u32, buffer_height: u32, canvas: &Canvas) {
    let canvas_width = canvas.width();
    let canvas_height = canvas.height();
    if canvas_width == 0 || canvas_height == 0 || buffer_width == 0 {
        return;
    }
    let pixels = canvas.pixels();

    for y in 0..buffer_height {
        let src_y = ((y as u64 * canvas_height as u64) / buffer_height as u64) as u32;
        let src_row = (src_y.min(canvas_height - 1) * canvas_width) as usize;
        let dst_row = (y * buffer_width) as usize;

        for x in 0..buffer_width {
            let src_x = ((x as u64 * canvas_width as u64) / buffer_width as u64) as u32;
            let dst_idx = dst_row + x as usize;
            if dst_idx >= buffer.len() {
                return;
            }
            buffer[dst_idx] = pixels[src_row + src_x.min(canvas_width - 1) as usize].to_u32_xrgb();
        }
    }
}
