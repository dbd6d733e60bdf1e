use murmur_runtime::FeedController;
use ratatui::widgets::ListState;

/// Event-loop state: the controller plus what the terminal needs on top of
/// it (feed selection, prompt cursor, quit flag).
pub(crate) struct App {
    pub controller: FeedController,
    pub prompts: Vec<String>,
    prompt_cursor: Option<usize>,
    pub feed_list: ListState,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: FeedController, prompts: Vec<String>) -> Self {
        let mut feed_list = ListState::default();
        if !controller.state().thoughts().is_empty() {
            feed_list.select(Some(0));
        }

        Self {
            controller,
            prompts,
            prompt_cursor: None,
            feed_list,
            should_quit: false,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.controller.state().thoughts().len();
        if len == 0 {
            self.feed_list.select(None);
            return;
        }
        let next = match self.feed_list.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.feed_list.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let len = self.controller.state().thoughts().len();
        if len == 0 {
            self.feed_list.select(None);
            return;
        }
        let previous = self.feed_list.selected().map_or(0, |i| i.saturating_sub(1));
        self.feed_list.select(Some(previous));
    }

    /// Toggle the like on the currently selected feed row.
    pub fn toggle_selected_like(&mut self) {
        if let Some(index) = self.feed_list.selected()
            && let Some(thought) = self.controller.state().thoughts().get(index)
        {
            let id = thought.id;
            self.controller.toggle_like(id);
        }
    }

    /// Replace the draft with the next spark prompt (plus a trailing space,
    /// so the user can keep typing).
    pub fn next_prompt(&mut self) {
        self.apply_prompt(|cursor, len| match cursor {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn previous_prompt(&mut self) {
        self.apply_prompt(|cursor, len| match cursor {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    fn apply_prompt(&mut self, step: impl Fn(Option<usize>, usize) -> usize) {
        if self.prompts.is_empty() {
            return;
        }
        let index = step(self.prompt_cursor, self.prompts.len());
        self.prompt_cursor = Some(index);
        let prompt = format!("{} ", self.prompts[index]);
        self.controller.edit_draft(prompt);
    }

    /// Keep the feed selection inside bounds after the feed grows.
    pub fn snap_selection_to_head(&mut self) {
        if self.controller.state().thoughts().is_empty() {
            self.feed_list.select(None);
        } else {
            self.feed_list.select(Some(0));
        }
    }
}
