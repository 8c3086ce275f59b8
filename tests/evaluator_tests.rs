//! Integration tests for the evaluation layer.

use benchfn::prelude::*;

fn sphere(dimensions: usize) -> BenchmarkProblem {
    FunctionRegistry::standard()
        .problem("sphere", dimensions)
        .expect("sphere is registered")
}

// =============================================================================
// Test: evaluate counts exactly once and tracks last fitness
// =============================================================================

#[test]
fn test_evaluate_increments_counter_and_sets_last_fitness() {
    let problem = sphere(3);
    let mut evaluator = Evaluator::new(&problem);

    assert_eq!(evaluator.num_evals(), 0);
    assert!(evaluator.last_fitness().is_none());

    let fitness = evaluator.evaluate(&[1.0, 2.0, 2.0]).unwrap();
    assert_eq!(fitness, 9.0);
    assert_eq!(evaluator.num_evals(), 1);
    assert_eq!(evaluator.last_fitness(), Some(&9.0));

    let fitness = evaluator.evaluate(&[0.0, 0.0, 0.0]).unwrap();
    assert_eq!(fitness, 0.0);
    assert_eq!(evaluator.num_evals(), 2);
    assert_eq!(evaluator.last_fitness(), Some(&0.0));
}

#[test]
fn test_evaluate_rejects_wrong_dimensionality() {
    let problem = sphere(3);
    let mut evaluator = Evaluator::new(&problem);

    let err = evaluator.evaluate(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 3,
            got: 2
        }
    ));
    // A rejected call is not counted and leaves no last fitness.
    assert_eq!(evaluator.num_evals(), 0);
    assert!(evaluator.last_fitness().is_none());
}

#[test]
fn test_evaluate_feeds_the_archive() {
    let problem = sphere(2);
    let mut evaluator = Evaluator::with_archive_capacity(&problem, 2).unwrap();

    evaluator.evaluate(&[3.0, 0.0]).unwrap(); // 9.0
    evaluator.evaluate(&[1.0, 0.0]).unwrap(); // 1.0
    evaluator.evaluate(&[2.0, 0.0]).unwrap(); // 4.0 — evicts 9.0

    let archive = evaluator.archive();
    assert_eq!(archive.len(), 2);
    assert_eq!(archive.best_fitness(), Some(&1.0));
    assert_eq!(archive.best().unwrap().params, vec![1.0, 0.0]);
    assert_eq!(archive.best().unwrap().num_evals, 2);
}

#[test]
fn test_noisy_objective_is_not_memoized() {
    let problem = FunctionRegistry::standard()
        .problem_with_seed("quartic_noisy", 2, 99)
        .unwrap();
    let mut evaluator = Evaluator::new(&problem);

    let first = evaluator.evaluate(&[0.0, 0.0]).unwrap();
    let second = evaluator.evaluate(&[0.0, 0.0]).unwrap();
    assert_ne!(first, second);
    assert_eq!(evaluator.num_evals(), 2);
}

// =============================================================================
// Test: comparison and tournament selection
// =============================================================================

#[test]
fn test_is_better_delegates_to_scheme() {
    let problem = sphere(2);
    let evaluator = Evaluator::new(&problem);

    assert!(evaluator.is_better(&1.0, &2.0));
    assert!(!evaluator.is_better(&2.0, &1.0));
    assert!(evaluator.is_better(&1.0, &f64::NAN));
}

#[test]
fn test_evaluate_is_better_counts_one_evaluation() {
    let problem = sphere(2);
    let mut evaluator = Evaluator::new(&problem);

    // f(1, 0) = 1.0, strictly better than 4.0
    assert!(evaluator.evaluate_is_better(&[1.0, 0.0], &4.0).unwrap());
    assert_eq!(evaluator.num_evals(), 1);
    assert!(!evaluator.evaluate_is_better(&[3.0, 0.0], &4.0).unwrap());
    assert_eq!(evaluator.num_evals(), 2);
}

#[test]
fn test_best_of_returns_winner_and_counts_two() {
    let problem = sphere(3);
    let mut evaluator = Evaluator::new(&problem);

    // f = 2.0 vs f = 7.0
    let a = [1.0, 1.0, 0.0];
    let b = [2.0, 1.0, (2.0_f64).sqrt()];
    let (winner, fitness) = evaluator.best_of(&a, &b).unwrap();
    assert_eq!(winner, a.to_vec());
    assert!((fitness - 2.0).abs() < 1e-12);
    assert_eq!(evaluator.num_evals(), 2);

    // Order of arguments does not matter for who wins.
    let (winner, _) = evaluator.best_of(&b, &a).unwrap();
    assert_eq!(winner, a.to_vec());
    assert_eq!(evaluator.num_evals(), 4);
}

#[test]
fn test_best_of_tie_prefers_first_argument() {
    let problem = sphere(2);
    let mut evaluator = Evaluator::new(&problem);

    // Both evaluate to 1.0; the first argument must win.
    let (winner, fitness) = evaluator.best_of(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    assert_eq!(winner, vec![1.0, 0.0]);
    assert_eq!(fitness, 1.0);
    assert_eq!(evaluator.num_evals(), 2);
}

// =============================================================================
// Test: ranking
// =============================================================================

#[test]
fn test_rank_orders_preset_fitness_best_first() {
    let problem = sphere(1);
    let mut evaluator = Evaluator::new(&problem);

    let mut population = vec![
        Candidate::new(vec![0.0]),
        Candidate::new(vec![0.0]),
        Candidate::new(vec![0.0]),
    ];
    population[0].set_fitness(5.0);
    population[1].set_fitness(1.0);
    population[2].set_fitness(3.0);

    evaluator.rank_by_fitness(&mut population).unwrap();

    let order: Vec<f64> = population.iter().map(|c| *c.fitness().unwrap()).collect();
    assert_eq!(order, vec![1.0, 3.0, 5.0]);
    assert!(population.iter().all(|c| c.fitness().is_some()));
    // All fitness was known, so nothing was evaluated.
    assert_eq!(evaluator.num_evals(), 0);
}

#[test]
fn test_rank_evaluates_only_missing_fitness_and_is_idempotent() {
    let problem = sphere(1);
    let mut evaluator = Evaluator::new(&problem);

    let mut population = vec![
        Candidate::new(vec![3.0]), // 9.0, needs evaluation
        Candidate::new(vec![1.0]), // 1.0, needs evaluation
        Candidate::new(vec![2.0]), // 4.0, needs evaluation
    ];
    population[1].set_fitness(1.0); // pre-set: must not be re-evaluated

    evaluator.rank_by_fitness(&mut population).unwrap();
    assert_eq!(evaluator.num_evals(), 2);

    let first_order: Vec<f64> = population.iter().map(|c| *c.fitness().unwrap()).collect();
    assert_eq!(first_order, vec![1.0, 4.0, 9.0]);

    // Second call: same order, zero additional evaluations.
    evaluator.rank_by_fitness(&mut population).unwrap();
    assert_eq!(evaluator.num_evals(), 2);
    let second_order: Vec<f64> = population.iter().map(|c| *c.fitness().unwrap()).collect();
    assert_eq!(second_order, first_order);
}

#[test]
fn test_rank_treats_stored_nan_as_already_evaluated() {
    let problem = sphere(1);
    let mut evaluator = Evaluator::new(&problem);

    let mut population = vec![Candidate::new(vec![1.0]), Candidate::new(vec![2.0])];
    population[0].set_fitness(f64::NAN); // present but pathological
    population[1].set_fitness(4.0);

    evaluator.rank_by_fitness(&mut population).unwrap();
    // Stored NaN is a valid fitness, not "unevaluated": no evaluation happens
    // and it ranks last.
    assert_eq!(evaluator.num_evals(), 0);
    assert_eq!(population[0].fitness(), Some(&4.0));
    assert!(population[1].fitness().unwrap().is_nan());

    // Clearing the fitness makes the candidate eligible again.
    population[1].clear_fitness();
    evaluator.rank_by_fitness(&mut population).unwrap();
    assert_eq!(evaluator.num_evals(), 1);
}

#[test]
fn test_rank_keeps_slot_indices_with_their_candidates() {
    let problem = sphere(1);
    let mut evaluator = Evaluator::new(&problem);

    let mut population = vec![
        Candidate::with_index(vec![3.0], 0),
        Candidate::with_index(vec![1.0], 1),
        Candidate::with_index(vec![2.0], 2),
    ];
    evaluator.rank_by_fitness(&mut population).unwrap();

    // Best first by fitness 1 < 4 < 9; each candidate kept its own index.
    let indices: Vec<usize> = population.iter().map(|c| c.index().unwrap()).collect();
    assert_eq!(indices, vec![1, 2, 0]);
}

#[test]
fn test_rank_is_stable_for_equal_fitness() {
    let problem = sphere(1);
    let mut evaluator = Evaluator::new(&problem);

    let mut population: Vec<Candidate> = (0..4)
        .map(|slot| Candidate::with_index(vec![0.0], slot))
        .collect();
    for candidate in &mut population {
        candidate.set_fitness(2.0);
    }
    population[0].set_fitness(7.0);

    evaluator.rank_by_fitness(&mut population).unwrap();
    // The three tied candidates keep their original relative order.
    let indices: Vec<usize> = population.iter().map(|c| c.index().unwrap()).collect();
    assert_eq!(indices, vec![1, 2, 3, 0]);
}

#[test]
fn test_ranked_copy_does_not_mutate_original() {
    let problem = sphere(1);
    let mut evaluator = Evaluator::new(&problem);

    let original = vec![Candidate::new(vec![3.0]), Candidate::new(vec![1.0])];
    let mut copy = original.clone();
    evaluator.rank_by_fitness(&mut copy).unwrap();
    copy[0].params_mut()[0] = -100.0;

    assert!(original[0].fitness().is_none());
    assert_eq!(original[0].params(), &[3.0]);
    assert_eq!(original[1].params(), &[1.0]);
}

// =============================================================================
// Test: convergence check and reporting
// =============================================================================

#[test]
fn test_fitness_is_within_ftol() {
    let problem = sphere(2);
    let mut evaluator = Evaluator::new(&problem);

    // No evaluations yet: no best fitness to compare.
    assert!(!evaluator.fitness_is_within_ftol(1.0));

    evaluator.evaluate(&[2.0, 0.0]).unwrap(); // 4.0
    assert!(!evaluator.fitness_is_within_ftol(1.0));
    assert!(evaluator.fitness_is_within_ftol(5.0));

    evaluator.evaluate(&[0.1, 0.0]).unwrap(); // 0.01
    assert!(evaluator.fitness_is_within_ftol(0.1));
}

#[test]
fn test_fitness_is_within_ftol_needs_declared_optimum() {
    let space = SearchSpace::symmetric(2, 100.0).unwrap();
    // No with_optimum: the check can never succeed.
    let problem = BenchmarkProblem::new("sphere", benchfn::functions::sphere, space);
    let mut evaluator = Evaluator::new(&problem);

    evaluator.evaluate(&[0.0, 0.0]).unwrap();
    assert!(!evaluator.fitness_is_within_ftol(f64::INFINITY));
}

#[test]
fn test_describe_and_problem_summary() {
    let problem = sphere(3);
    let mut evaluator = Evaluator::new(&problem);

    assert!(evaluator.describe().starts_with("0 evaluations"));

    evaluator.evaluate(&[1.0, 0.0, 0.0]).unwrap();
    let report = evaluator.describe();
    assert!(report.starts_with("1 evaluations"), "{report}");
    assert!(report.contains("1.0"), "{report}");

    let summary = evaluator.problem_summary();
    assert_eq!(summary, "sphere: 3 dimensions in [-100, 100]^3, scalar fitness");
}

// =============================================================================
// Test: vector fitness through the same evaluator
// =============================================================================

struct BiSphere {
    space: SearchSpace,
    scheme: VectorScheme,
}

impl BiSphere {
    fn new() -> Self {
        Self {
            space: SearchSpace::symmetric(2, 10.0).unwrap(),
            scheme: VectorScheme::minimize_all(2),
        }
    }
}

impl Problem for BiSphere {
    type Scheme = VectorScheme;

    fn objective(&self, params: &[f64]) -> Vec<f64> {
        // Distance to two different anchor points: a classic bi-objective toy.
        let near_origin: f64 = params.iter().map(|x| x * x).sum();
        let near_ones: f64 = params.iter().map(|x| (x - 1.0).powi(2)).sum();
        vec![near_origin, near_ones]
    }

    fn scheme(&self) -> &VectorScheme {
        &self.scheme
    }

    fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    fn name(&self) -> &str {
        "bi-sphere"
    }
}

#[test]
fn test_vector_fitness_evaluation_and_ranking() {
    let problem = BiSphere::new();
    let mut evaluator = Evaluator::new(&problem);

    let fitness = evaluator.evaluate(&[0.0, 0.0]).unwrap();
    assert_eq!(fitness, vec![0.0, 2.0]);
    assert_eq!(evaluator.num_evals(), 1);

    // (0.5, 0.5) dominates (5, 5): better on both objectives.
    let mut population = vec![
        Candidate::new(vec![5.0, 5.0]),
        Candidate::new(vec![0.5, 0.5]),
    ];
    evaluator.rank_by_fitness(&mut population).unwrap();
    assert_eq!(population[0].params(), &[0.5, 0.5]);
    assert_eq!(evaluator.num_evals(), 3);

    assert_eq!(
        evaluator.problem_summary(),
        "bi-sphere: 2 dimensions in [-10, 10]^2, vector fitness"
    );
}
