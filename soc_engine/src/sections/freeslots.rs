use crate::loader::Load;
use crate::symbols::Claim;

impl Load<'_> {
    /// `FREESLOT`: `<CLASS>_<NAME>` entries either on the directive line
    /// itself or, when the line has none, one per body line.
    pub(crate) fn read_freeslots(&mut self, inline: &[String]) {
        if !inline.is_empty() {
            for entry in inline {
                self.declare_slot(entry);
            }
            return;
        }
        while let Some(line) = self.next_field() {
            if !self.declare_slot(&line.body) {
                break;
            }
        }
    }

    /// Declares one entry. `false` when the text is not a slot name at all.
    fn declare_slot(&mut self, entry: &str) -> bool {
        let entry = entry.trim_start().trim_start_matches('_');
        let Some((class, name)) = entry.split_once('_') else {
            return false;
        };
        let class = class.to_ascii_uppercase();
        let name = name.trim_end().to_ascii_uppercase();
        if name.is_empty() {
            return false;
        }
        match self.context.symbols.declare(&class, &name, self.source.wad()) {
            Ok(Claim::New(_)) => {}
            Ok(Claim::Existing(value)) => {
                log::debug!("{class}_{name} already declared ({value})");
            }
            Err(err) => self.warn(err.to_string()),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use soc_formats::PatchSource;

    use crate::catalog;
    use crate::{JsonGameDataStore, LeftToRightEvaluator, LoadReport, LoaderConfig, PatchLoader, SocContext};

    fn load(context: &mut SocContext, text: &str) -> LoadReport {
        let mut store = JsonGameDataStore::in_memory();
        let mut loader =
            PatchLoader::new(context, &LeftToRightEvaluator, &mut store, LoaderConfig::default());
        loader.load(PatchSource::from_text(text), false).unwrap()
    }

    #[test]
    fn directive_line_entries_and_body_entries_mix() {
        let mut context = SocContext::new().unwrap();
        let report = load(
            &mut context,
            "FREESLOT S_A S_B\nFREESLOT\nS_C\nMT_D\n\nFRAME S_B\nDURATION = 7\n\n",
        );
        assert_eq!(report.warning_count(), 0);

        let states = &context.symbols.free.states;
        let first = catalog::s_firstfreeslot();
        assert_eq!(states.find("A"), Some(first));
        assert_eq!(states.find("B"), Some(first + 1));
        assert_eq!(states.find("C"), Some(first + 2));
        assert_eq!(context.symbols.free.mobjs.find("D"), Some(catalog::mt_firstfreeslot()));
        assert_eq!(context.tables.states[first + 1].tics, 7);
    }

    #[test]
    fn an_inline_declaration_does_not_swallow_the_next_directive() {
        let mut context = SocContext::new().unwrap();
        let report = load(&mut context, "FREESLOT MT_FOO\nTHING MT_FOO\nSPEED = 5\n\n");
        assert_eq!(report.warning_count(), 0);
        let slot = context.symbols.free.mobjs.find("FOO").unwrap();
        assert_eq!(context.tables.mobjinfo[slot].speed, 5);
    }
}
