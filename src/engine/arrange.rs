//! The whole pipeline in one call.
//!
//! Hosts rarely run the stages by hand. `arrange` wires them together:
//! classify the children against the declared slots, extract the
//! singletons, compose the remainder with the host's injectors, and
//! identify the boundary of what came out.

use crate::engine::boundary::{assign_boundary, Boundary};
use crate::engine::classify::classify;
use crate::engine::compose::{compose, Injectors};
use crate::engine::extract::{extract, Singletons, SlotDeclarations};
use crate::error::Result;
use crate::node::Node;

// =============================================================================
// Arrangement
// =============================================================================

/// Everything a host needs to build its output tree.
///
/// An arrangement is a value for one build pass. Nothing here is cached
/// or shared: hosts re-arrange from scratch every time they render, so a
/// changed child list can never leak stale structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    /// Extracted single-occupancy slots, for fixed structural positions.
    pub singletons: Singletons,
    /// The repeatable remainder in author order, injectors applied.
    pub sequence: Vec<Node>,
    /// First and last of `sequence`, for Home/End navigation.
    pub boundary: Boundary,
}

// =============================================================================
// arrange
// =============================================================================

/// Run classify, extract, compose, and boundary assignment over a
/// host's children.
///
/// Every input child ends up in exactly one place: a singleton slot or
/// the sequence. Fails without producing any output if a singleton slot
/// matched more than once.
pub fn arrange(
    children: &[Node],
    decls: &SlotDeclarations,
    injectors: &Injectors,
) -> Result<Arrangement> {
    let partition = classify(children, &decls.recognized());
    let (singletons, remainder) = extract(partition, decls)?;
    let sequence = compose(remainder, injectors);
    let boundary = assign_boundary(&sequence);

    log::debug!(
        "arranged {} children: {} singleton(s), {} in sequence",
        children.len(),
        singletons.len(),
        sequence.len()
    );

    Ok(Arrangement {
        singletons,
        sequence,
        boundary,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositionError;
    use crate::node::Props;
    use crate::types::TypeTag;
    use pretty_assertions::assert_eq;

    fn option(value: &str) -> Node {
        Node::new(TypeTag::Option).prop("value", value)
    }

    fn menu_slots() -> SlotDeclarations {
        SlotDeclarations::new()
            .single(TypeTag::Header)
            .single(TypeTag::Footer)
            .many(TypeTag::Option)
    }

    #[test]
    fn test_arrange_full_pipeline() {
        let children = vec![
            Node::new(TypeTag::Header),
            option("a"),
            Node::new(TypeTag::View),
            option("b"),
            Node::new(TypeTag::Footer),
        ];

        let arrangement = arrange(&children, &menu_slots(), &Injectors::new()).unwrap();

        assert!(arrangement.singletons.contains(TypeTag::Header));
        assert!(arrangement.singletons.contains(TypeTag::Footer));
        assert_eq!(
            arrangement.sequence,
            vec![option("a"), Node::new(TypeTag::View), option("b")]
        );
        assert_eq!(arrangement.boundary.first.as_ref(), Some(&arrangement.sequence[0]));
        assert_eq!(arrangement.boundary.last.as_ref(), Some(&arrangement.sequence[2]));
    }

    #[test]
    fn test_every_child_lands_exactly_once() {
        let children = vec![
            option("a"),
            Node::new(TypeTag::Header),
            Node::new(TypeTag::Checkbox),
            option("b"),
        ];

        let arrangement = arrange(&children, &menu_slots(), &Injectors::new()).unwrap();
        assert_eq!(
            arrangement.singletons.len() + arrangement.sequence.len(),
            children.len()
        );
    }

    #[test]
    fn test_boundary_reflects_injected_props() {
        // Boundary handles come from the composed sequence, so they carry
        // whatever the injectors added.
        let children = vec![option("a"), option("b")];
        let injectors = Injectors::new().on(TypeTag::Option, |node, ctx| {
            let mut patched = node.clone();
            if ctx.is_first() {
                patched.props.set("first", true);
            }
            if ctx.is_last() {
                patched.props.set("last", true);
            }
            patched
        });

        let arrangement = arrange(&children, &menu_slots(), &injectors).unwrap();
        let first = arrangement.boundary.first.unwrap();
        let last = arrangement.boundary.last.unwrap();

        assert_eq!(first.get("first").unwrap().as_bool(), Some(true));
        assert_eq!(last.get("last").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_cardinality_violation_aborts_whole_arrangement() {
        let children = vec![Node::new(TypeTag::Header), Node::new(TypeTag::Header)];
        let err = arrange(&children, &menu_slots(), &Injectors::new()).unwrap_err();

        assert_eq!(
            err,
            CompositionError::CardinalityViolation {
                tag: TypeTag::Header,
                count: 2,
            }
        );
    }

    #[test]
    fn test_empty_children_arrange_to_empty() {
        let arrangement = arrange(&[], &menu_slots(), &Injectors::new()).unwrap();
        assert!(arrangement.singletons.is_empty());
        assert!(arrangement.sequence.is_empty());
        assert!(arrangement.boundary.is_empty());
    }

    #[test]
    fn test_injected_style_defaults_defer_to_author() {
        let children = vec![option("a").style("height", "3rem")];
        let injectors = Injectors::new().on(TypeTag::Option, |node, _| {
            node.with_defaults(&Props::new().with(
                "style",
                Props::new().with("height", "2rem").with("display", "flex"),
            ))
        });

        let arrangement = arrange(&children, &menu_slots(), &injectors).unwrap();
        let style = arrangement.sequence[0].style_map().unwrap();
        assert_eq!(style.get("height").unwrap().as_str(), Some("3rem"));
        assert_eq!(style.get("display").unwrap().as_str(), Some("flex"));
    }
}
