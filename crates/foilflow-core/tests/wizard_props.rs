//! Property tests for wizard sessions driven by random action sequences over
//! the built-in corpus.

use foilflow_core::{corpus, FlowGraph, WizardSession};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Choose(usize),
    Progress,
    StartOver,
    Jump(usize),
    Restart,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..3).prop_map(Action::Choose),
        1 => Just(Action::Progress),
        1 => Just(Action::StartOver),
        1 => (0usize..12).prop_map(Action::Jump),
        1 => Just(Action::Restart),
    ]
}

fn apply(session: &mut WizardSession, graph: &FlowGraph, action: &Action) {
    let _ = match *action {
        Action::Choose(i) => session.choose_option(graph, i),
        Action::Progress => session.follow_progression(graph),
        Action::StartOver => {
            session.start_over(graph);
            Ok(())
        }
        Action::Jump(i) => session.jump_to_history(i),
        Action::Restart => {
            session.restart();
            Ok(())
        }
    };
}

/// True when `label` is an option or progression label of node `id`.
fn offers(graph: &FlowGraph, id: &str, label: &str) -> bool {
    graph.get(id).is_some_and(|node| {
        node.options().iter().any(|o| o.label == label)
            || node.progression_link.as_ref().is_some_and(|p| p.label == label)
    })
}

proptest! {
    #[test]
    fn history_records_only_offered_answers(actions in prop::collection::vec(action(), 0..40)) {
        let graph = corpus::builtin().unwrap();
        let mut session = WizardSession::new();
        for a in &actions {
            apply(&mut session, &graph, a);
        }

        for item in session.history() {
            prop_assert!(offers(&graph, item.node_id.as_str(), &item.answer_label));
            prop_assert_eq!(&graph.node(item.node_id.as_str()).unwrap().title, &item.question_title);
        }
        // Built-in targets never dangle, so the current id always resolves.
        prop_assert!(graph.contains(session.current_id().as_str()));
    }

    #[test]
    fn failed_actions_leave_state_untouched(actions in prop::collection::vec(action(), 0..40)) {
        let graph = corpus::builtin().unwrap();
        let mut session = WizardSession::new();
        for a in &actions {
            let before = session.clone();
            let failed = match *a {
                Action::Choose(i) => session.choose_option(&graph, i).is_err(),
                Action::Progress => session.follow_progression(&graph).is_err(),
                Action::Jump(i) => session.jump_to_history(i).is_err(),
                _ => {
                    apply(&mut session, &graph, a);
                    false
                }
            };
            if failed {
                prop_assert_eq!(&session, &before);
            }
        }
    }

    #[test]
    fn jump_truncates_to_index(
        actions in prop::collection::vec(action(), 0..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let graph = corpus::builtin().unwrap();
        let mut session = WizardSession::new();
        for a in &actions {
            apply(&mut session, &graph, a);
        }
        prop_assume!(!session.history().is_empty());

        let index = pick.index(session.history().len());
        let expected_current = session.history()[index].node_id.clone();
        let expected_prefix = session.history()[..index].to_vec();

        session.jump_to_history(index).unwrap();
        prop_assert_eq!(session.current_id(), &expected_current);
        prop_assert_eq!(session.history(), expected_prefix.as_slice());
    }
}
