//! Bundled demo lectures

use lecture_core::entities::{Lecture, Section};

const ML_SECTIONS: [(&str, &str); 6] = [
    (
        "lec1-sec1",
        "Machine learning is the study of algorithms that automatically improve from experience.\n\
         In simple terms, ML allows computers to learn patterns from data instead of being explicitly programmed.\n\
         This lecture introduces the basic terminology and categories of ML.",
    ),
    (
        "lec1-sec2",
        "In supervised learning, the model is trained using labeled data\u{2014}meaning each input comes with a correct output.\n\
         Common tasks include classification, where the goal is to predict a category, and regression, where the goal is to predict a numerical value.",
    ),
    (
        "lec1-sec3",
        "Unsupervised learning deals with unlabeled data.\n\
         The system tries to discover hidden structure, such as grouping similar data points together using clustering algorithms or finding underlying patterns with dimensionality reduction techniques.",
    ),
    (
        "lec1-sec4",
        "Loss functions measure how wrong the model's predictions are.\n\
         The goal of training is to minimize this loss using optimization techniques such as gradient descent.\n\
         Smaller loss usually implies better model performance, though overfitting can complicate this.",
    ),
    (
        "lec1-sec5",
        "Gradient descent is an optimization algorithm used to minimize a loss function.\n\
         The model's parameters are updated in the opposite direction of the gradient of the loss function.\n\
         The size of each step is determined by the learning rate.",
    ),
    (
        "lec1-sec6",
        "Overfitting occurs when the model memorizes the training data and performs poorly on unseen data.\n\
         Regularization techniques such as L2 penalty, dropout, or early stopping can help prevent this problem.",
    ),
];

const OS_SECTIONS: [(&str, &str); 7] = [
    (
        "lec2-sec1",
        "An operating system (OS) manages hardware, software, and system resources.\n\
         One of its core responsibilities is process management\u{2014}deciding which programs run and when.",
    ),
    (
        "lec2-sec2",
        "A process is an instance of a running program.\n\
         It contains code, data, registers, an instruction pointer, and associated resources.\n\
         Processes are isolated from each other for safety and reliability.",
    ),
    (
        "lec2-sec3",
        "Context switching is when the OS saves the state of a currently running process and loads the state of another.\n\
         This is required for multitasking and preemptive scheduling.\n\
         However, context switching introduces overhead because the OS must save/restore state.",
    ),
    (
        "lec2-sec4",
        "CPU scheduling policies determine the order in which processes run.\n\
         Common policies include First-Come First-Served (FCFS), Shortest Job First (SJF), Priority Scheduling, and Round Robin (RR).\n\
         The goal is to balance throughput, responsiveness, and fairness.",
    ),
    (
        "lec2-sec5",
        "Round Robin scheduling gives each process a fixed time slice called a quantum.\n\
         After the quantum expires, the OS preempts the process and switches to the next ready process.\n\
         This ensures responsiveness but increases context switch overhead if the quantum is too small.",
    ),
    (
        "lec2-sec6",
        "Starvation occurs when a process never gets scheduled because others keep taking priority.\n\
         Aging is a technique where the priority of waiting processes gradually increases to ensure fairness.",
    ),
    (
        "lec2-sec7",
        "Modern OS schedulers like Linux\u{2019}s Completely Fair Scheduler (CFS) aim to approximate fair CPU sharing.\n\
         CFS uses virtual runtimes to track how much CPU time each process should receive over time.",
    ),
];

fn build(id: &str, title: &str, sections: &[(&str, &str)]) -> Lecture {
    let sections = sections
        .iter()
        .zip(1u32..)
        .map(|((section_id, text), order)| Section::new(*section_id, order, *text))
        .collect();
    Lecture::new(id, title, sections)
}

/// The two demo lectures, unpublished and in section order
pub fn demo_lectures() -> Vec<Lecture> {
    vec![
        build("lec1", "Introduction to Machine Learning", &ML_SECTIONS),
        build(
            "lec2",
            "Operating Systems: Processes & Scheduling",
            &OS_SECTIONS,
        ),
    ]
}
