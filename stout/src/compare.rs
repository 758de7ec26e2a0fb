use crate::cli::CompareArgs;
use crate::output::{OutputFormatter, Relation};

pub(crate) fn compare(args: CompareArgs, out: &dyn OutputFormatter) {
    let relation = Relation::between(args.left, args.right);
    tracing::debug!(left = args.left.ns(), right = args.right.ns(), %relation, "compared");
    out.compared(args.left, args.right, relation);
}
