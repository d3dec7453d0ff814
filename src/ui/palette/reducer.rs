use crate::ui::mvi::Reducer;
use crate::ui::palette::intent::PaletteIntent;
use crate::ui::palette::state::PaletteState;

pub struct PaletteReducer;

impl Reducer for PaletteReducer {
    type State = PaletteState;
    type Intent = PaletteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaletteIntent::FocusLeft => {
                let focused = if state.focused == 0 {
                    state.swatches.len().saturating_sub(1)
                } else {
                    state.focused - 1
                };
                PaletteState { focused, ..state }
            }
            PaletteIntent::FocusRight => {
                let focused = if state.focused + 1 >= state.swatches.len() {
                    0
                } else {
                    state.focused + 1
                };
                PaletteState { focused, ..state }
            }
            PaletteIntent::Apply => {
                let selected = state
                    .swatches
                    .get(state.focused)
                    .copied()
                    .unwrap_or(state.selected);
                PaletteState { selected, ..state }
            }
            PaletteIntent::Select(position) => {
                // 1-based: position 0 and anything past the row are no-ops
                match position
                    .checked_sub(1)
                    .and_then(|idx| state.swatches.get(idx).copied().map(|color| (idx, color)))
                {
                    Some((focused, selected)) => PaletteState {
                        focused,
                        selected,
                        ..state
                    },
                    None => state,
                }
            }
        }
    }
}
