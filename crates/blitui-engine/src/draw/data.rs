use super::DrawList;

/// Everything to render for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawData {
    pub cmd_lists: Vec<DrawList>,
}

impl DrawData {
    pub fn new(cmd_lists: Vec<DrawList>) -> Self {
        Self { cmd_lists }
    }

    /// Total vertex count across all lists.
    pub fn total_vtx_count(&self) -> usize {
        self.cmd_lists.iter().map(|l| l.vtx_buffer.len()).sum()
    }

    /// Total index count across all lists.
    pub fn total_idx_count(&self) -> usize {
        self.cmd_lists.iter().map(|l| l.idx_buffer.len()).sum()
    }

    /// `true` when no list holds any command.
    pub fn is_empty(&self) -> bool {
        self.cmd_lists.iter().all(|l| l.cmd_buffer.is_empty())
    }
}
