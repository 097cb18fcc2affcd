//! Spec §8.2 scenario 5 ("Global shadowing").

mod helpers;

use esc_checker::context::CheckerContext;
use esc_common::CheckerOptions;
use helpers::*;

#[test]
fn local_array_alias_shadows_the_global_one_but_global_this_still_reaches_it() {
    // type Array<T> = {items: T, isLocal: boolean}
    // declare val localArr: Array<number>
    // declare val globalArr: globalThis.Array<number>
    let local_array = generic_type_alias(
        "Array",
        &["T"],
        obj_ann(vec![prop_member("items", name_ref(&["T"])), prop_member("isLocal", name_ref(&["boolean"]))]),
    );
    let local_arr = declared_val("localArr", name_ref_args(&["Array"], vec![name_ref(&["number"])]));
    let global_arr = declared_val("globalArr", name_ref_args(&["globalThis", "Array"], vec![name_ref(&["number"])]));

    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![local_array, local_arr, global_arr]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert!(diags.is_empty(), "both the local and globalThis-qualified lookups should resolve cleanly, got {diags:?}");
}
