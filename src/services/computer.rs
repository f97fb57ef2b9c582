use crate::models::events::{GameEvent, RenderReason};
use crate::services::command::{Command, CommandContext};

/// STATUS: redraw the mission status panel. Free action, never fails.
pub struct StatusCommand;

impl Command for StatusCommand {
    fn name(&self) -> &'static str {
        "STATUS"
    }

    fn description(&self) -> &'static str {
        "Show mission status"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> bool {
        ctx.game_state
            .notify(GameEvent::RenderRequested(RenderReason::Status));
        true
    }
}
