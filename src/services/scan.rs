use crate::models::events::{GameEvent, RenderReason};
use crate::services::command::{Command, CommandContext};

/// SRS: redraw the sector map. Free action, never fails.
pub struct ShortRangeScanCommand;

impl Command for ShortRangeScanCommand {
    fn name(&self) -> &'static str {
        "SRS"
    }

    fn description(&self) -> &'static str {
        "Short range scan"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> bool {
        ctx.game_state
            .notify(GameEvent::RenderRequested(RenderReason::Srs));
        true
    }
}
