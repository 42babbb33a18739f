//! Demo textbook content and question banks
//!
//! Simulates a real textbook ingestion system with two canned datasets:
//! an introductory quantum mechanics text and a machine learning text,
//! each paired with a bank of past-paper questions.

use super::types::{Chapter, Difficulty, Question, Section, Textbook};

pub fn quantum_physics_textbook() -> Textbook {
    Textbook {
        title: "Introduction to Quantum Mechanics".to_string(),
        author: "David J. Griffiths".to_string(),
        isbn: "978-1107179868".to_string(),
        edition: Some("3rd Edition".to_string()),
        chapters: vec![
            Chapter {
                number: 1,
                title: "The Wave Function".to_string(),
                sections: vec![
                    Section {
                        title: "Quantum Superposition".to_string(),
                        body: "The principle of superposition is a fundamental concept in quantum mechanics. \
It states that when two or more quantum states are possible, the actual state is a \
superposition (combination) of all possible states until a measurement is made.\n\
\n\
The wave function psi(x,t) contains all information about the quantum state. When measured, \
the wave function collapses to a single eigenstate. The probability of finding a particle \
at position x is given by |psi(x,t)|^2.\n\
\n\
Key points:\n\
1. Multiple states can exist simultaneously\n\
2. Measurement causes wave function collapse\n\
3. Probability is determined by wave function amplitude squared\n\
4. Superposition is destroyed upon observation"
                            .to_string(),
                        key_terms: vec![
                            "superposition".to_string(),
                            "wave function".to_string(),
                            "measurement".to_string(),
                            "collapse".to_string(),
                        ],
                        page: 12,
                    },
                    Section {
                        title: "Heisenberg Uncertainty Principle".to_string(),
                        body: "The Heisenberg Uncertainty Principle is a fundamental limitation in quantum mechanics \
that states we cannot simultaneously know both the exact position and exact momentum of a particle.\n\
\n\
Mathematical formulation: Delta x * Delta p >= hbar/2\n\
\n\
Where:\n\
- Delta x is the uncertainty in position\n\
- Delta p is the uncertainty in momentum\n\
- hbar is the reduced Planck constant (h/2pi)\n\
\n\
This is not due to measurement limitations, but rather a fundamental property of nature. \
The more precisely we know position, the less precisely we can know momentum, and vice versa.\n\
\n\
Applications:\n\
1. Explains stability of atoms\n\
2. Sets limits on measurement precision\n\
3. Fundamental to quantum field theory\n\
4. Basis for quantum cryptography"
                            .to_string(),
                        key_terms: vec![
                            "uncertainty principle".to_string(),
                            "position".to_string(),
                            "momentum".to_string(),
                            "Planck constant".to_string(),
                        ],
                        page: 24,
                    },
                ],
            },
            Chapter {
                number: 2,
                title: "The Schrödinger Equation".to_string(),
                sections: vec![Section {
                    title: "Time-Independent Schrödinger Equation".to_string(),
                    body: "The time-independent Schrödinger equation is the fundamental equation for \
stationary quantum states:\n\
\n\
H_hat * psi = E * psi\n\
\n\
Or in expanded form: -(hbar^2)/(2m) * d^2 psi/dx^2 + V(x) * psi = E * psi\n\
\n\
Where:\n\
- H_hat is the Hamiltonian operator (total energy)\n\
- psi is the wave function\n\
- E is the energy eigenvalue\n\
- V(x) is the potential energy\n\
- m is the particle mass\n\
\n\
This equation allows us to find allowed energy levels and corresponding wave functions \
for quantum systems. Solutions must be:\n\
1. Continuous\n\
2. Single-valued\n\
3. Normalizable\n\
4. Smooth (continuous first derivative)\n\
\n\
Common applications:\n\
- Particle in a box\n\
- Harmonic oscillator\n\
- Hydrogen atom\n\
- Quantum tunneling"
                        .to_string(),
                    key_terms: vec![
                        "Schrödinger equation".to_string(),
                        "Hamiltonian".to_string(),
                        "eigenvalue".to_string(),
                        "wave function".to_string(),
                    ],
                    page: 45,
                }],
            },
        ],
    }
}

pub fn machine_learning_textbook() -> Textbook {
    Textbook {
        title: "Pattern Recognition and Machine Learning".to_string(),
        author: "Christopher M. Bishop".to_string(),
        isbn: "978-0387310732".to_string(),
        edition: Some("1st Edition".to_string()),
        chapters: vec![Chapter {
            number: 1,
            title: "Introduction to Machine Learning".to_string(),
            sections: vec![
                Section {
                    title: "Supervised Learning".to_string(),
                    body: "Supervised learning is a machine learning paradigm where the algorithm learns \
from labeled training data. The goal is to learn a mapping from inputs to outputs based on \
example input-output pairs.\n\
\n\
Types of supervised learning:\n\
1. Classification - predicting discrete labels\n\
   Examples: spam detection, image recognition\n\
2. Regression - predicting continuous values\n\
   Examples: price prediction, temperature forecasting\n\
\n\
The learning process:\n\
1. Collect labeled training data (X, y)\n\
2. Choose a model/hypothesis class\n\
3. Define a loss function\n\
4. Optimize model parameters to minimize loss\n\
5. Evaluate on test data\n\
\n\
Common algorithms:\n\
- Linear regression\n\
- Logistic regression\n\
- Decision trees\n\
- Support Vector Machines (SVM)\n\
- Neural networks"
                        .to_string(),
                    key_terms: vec![
                        "supervised learning".to_string(),
                        "classification".to_string(),
                        "regression".to_string(),
                        "training data".to_string(),
                    ],
                    page: 18,
                },
                Section {
                    title: "Overfitting and Regularization".to_string(),
                    body: "Overfitting occurs when a model learns the training data too well, including \
noise and outliers, resulting in poor generalization to new data.\n\
\n\
Signs of overfitting:\n\
1. High accuracy on training data\n\
2. Poor accuracy on test/validation data\n\
3. Model is too complex for the amount of data\n\
\n\
Regularization techniques to prevent overfitting:\n\
1. L1 Regularization (Lasso):\n\
   Loss = MSE + lambda * sum |w_i|\n\
   Produces sparse models (some weights = 0)\n\
2. L2 Regularization (Ridge):\n\
   Loss = MSE + lambda * sum w_i^2\n\
   Shrinks weights uniformly\n\
3. Dropout (for neural networks):\n\
   Randomly deactivate neurons during training\n\
4. Early stopping:\n\
   Stop training when validation error starts increasing\n\
5. Data augmentation:\n\
   Artificially increase training data\n\
\n\
The regularization parameter lambda controls the trade-off between fitting the training \
data and keeping the model simple."
                        .to_string(),
                    key_terms: vec![
                        "overfitting".to_string(),
                        "regularization".to_string(),
                        "L1".to_string(),
                        "L2".to_string(),
                        "dropout".to_string(),
                    ],
                    page: 34,
                },
            ],
        }],
    }
}

pub fn quantum_physics_questions() -> Vec<Question> {
    vec![
        Question {
            id: "qp1".to_string(),
            text: "Explain the principle of quantum superposition with examples.".to_string(),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 10,
            frequency: 3,
            difficulty: Difficulty::Medium,
            topics: vec!["Wave Function".to_string(), "Quantum Superposition".to_string()],
        },
        Question {
            id: "qp2".to_string(),
            text: "Derive and explain the Heisenberg Uncertainty Principle.".to_string(),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 15,
            frequency: 5,
            difficulty: Difficulty::High,
            topics: vec!["Heisenberg Uncertainty Principle".to_string()],
        },
        Question {
            id: "qp3".to_string(),
            text: "What is the Heisenberg Uncertainty Principle? Discuss its implications."
                .to_string(),
            year: 2022,
            exam: "Midterm".to_string(),
            weightage: 10,
            frequency: 5,
            difficulty: Difficulty::Medium,
            topics: vec!["Heisenberg Uncertainty Principle".to_string()],
        },
        Question {
            id: "qp4".to_string(),
            text: "Solve the time-independent Schrödinger equation for a particle in a box."
                .to_string(),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 20,
            frequency: 4,
            difficulty: Difficulty::High,
            topics: vec!["Schrödinger Equation".to_string()],
        },
        Question {
            id: "qp5".to_string(),
            text: "Describe wave function collapse and measurement in quantum mechanics."
                .to_string(),
            year: 2022,
            exam: "Quiz".to_string(),
            weightage: 5,
            frequency: 2,
            difficulty: Difficulty::Low,
            topics: vec!["Wave Function".to_string(), "Measurement".to_string()],
        },
        Question {
            id: "qp6".to_string(),
            text: "Explain quantum superposition and provide real-world examples.".to_string(),
            year: 2021,
            exam: "Final Exam".to_string(),
            weightage: 10,
            frequency: 3,
            difficulty: Difficulty::Medium,
            topics: vec!["Quantum Superposition".to_string()],
        },
    ]
}

pub fn machine_learning_questions() -> Vec<Question> {
    vec![
        Question {
            id: "ml1".to_string(),
            text: "What is supervised learning? Explain with examples.".to_string(),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 10,
            frequency: 4,
            difficulty: Difficulty::Low,
            topics: vec!["Supervised Learning".to_string()],
        },
        Question {
            id: "ml2".to_string(),
            text: "Explain overfitting and discuss regularization techniques to prevent it."
                .to_string(),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 15,
            frequency: 5,
            difficulty: Difficulty::High,
            topics: vec!["Overfitting".to_string(), "Regularization".to_string()],
        },
        Question {
            id: "ml3".to_string(),
            text: "Compare L1 and L2 regularization methods.".to_string(),
            year: 2022,
            exam: "Midterm".to_string(),
            weightage: 10,
            frequency: 3,
            difficulty: Difficulty::Medium,
            topics: vec!["Regularization".to_string()],
        },
        Question {
            id: "ml4".to_string(),
            text: "What causes overfitting in machine learning models? How can it be prevented?"
                .to_string(),
            year: 2022,
            exam: "Quiz".to_string(),
            weightage: 10,
            frequency: 5,
            difficulty: Difficulty::Medium,
            topics: vec!["Overfitting".to_string()],
        },
    ]
}
