//! Built-in tip tables.
//!
//! Rows are indexed by the chosen category, columns by the landed category,
//! both in wheel order (`Category::ALL`).

/// Tips used when no work context was chosen.
pub(crate) const GENERAL_TIPS: [[&str; 6]; 6] = [
    // Sleep
    [
        "Consistent sleep and wake times strengthen your body clock and improve sleep quality.",
        "Poor sleep increases cortisol levels. Improving sleep duration helps your body handle stress better.",
        "Sleep is your primary energy source. One extra hour of sleep can boost next-day energy more than caffeine.",
        "Lack of sleep reduces attention and memory. Quality sleep sharpens focus and decision-making.",
        "Muscle recovery happens during deep sleep. Better sleep leads to stronger training results.",
        "Sleep deprivation increases cravings for sugary foods. Good sleep supports healthier eating choices.",
    ],
    // Stress
    [
        "Stress raises cortisol, which delays sleep. Power down screens 30 minutes before bed to help your body unwind.",
        "Managing stress daily prevents burnout. Short breathing breaks can reset your nervous system.",
        "Chronic stress drains energy reserves. Reducing stress helps restore natural energy levels.",
        "Stress overloads working memory. Calming your mind improves concentration and clarity.",
        "Moderate exercise reduces stress hormones. Even a short walk can improve your mood.",
        "Stress affects digestion and cravings. Balanced meals help stabilize stress responses.",
    ],
    // Energy
    [
        "Low energy often signals sleep debt. Consistent sleep restores energy more effectively than stimulants.",
        "Energy crashes increase stress. Stable routines help maintain both energy and calm.",
        "Sustained energy comes from habits, not hacks. Regular sleep and meals prevent crashes.",
        "Mental focus consumes energy. Working in short bursts helps preserve it.",
        "Movement increases circulation and energy. Light exercise can re-energize you quickly.",
        "Energy depends on fuel quality. Whole foods release energy more steadily than sugar.",
    ],
    // Focus
    [
        "Sleep strengthens attention and memory. One poor night can reduce focus by up to 30%.",
        "Stress disrupts focus. Slowing your breathing helps clear mental noise.",
        "Focus fades when energy drops. Short breaks help recharge your mental battery.",
        "The brain focuses best in intervals. Try 25-minute focus sessions for peak performance.",
        "Physical activity boosts brain oxygen. Moving your body improves mental clarity.",
        "Hydration and nutrients support focus. Even mild dehydration can impair attention.",
    ],
    // Fitness
    [
        "Exercise improves sleep depth, but late workouts can delay sleep. Train earlier when possible.",
        "Exercise lowers stress hormones naturally. Regular movement builds stress resilience.",
        "Fitness increases long-term energy. Active people feel less fatigue throughout the day.",
        "Movement enhances brain function. A short workout can improve focus afterward.",
        "Consistency matters more than intensity. Small daily workouts deliver lasting results.",
        "Nutrition fuels fitness. Protein and carbs help muscles recover and perform better.",
    ],
    // Nutrition
    [
        "Heavy or late meals disrupt sleep. Eating earlier supports better rest.",
        "Nutrient deficiencies increase stress sensitivity. Balanced meals support emotional stability.",
        "Food quality drives energy levels. Whole foods prevent energy spikes and crashes.",
        "The brain needs steady fuel. Balanced meals improve attention and mental performance.",
        "Nutrition supports recovery and strength. Eating well improves training outcomes.",
        "Consistent, balanced eating supports every system in your body.",
    ],
];

/// Tips for onshore crews.
pub(crate) const ONSHORE_TIPS: [[&str; 6]; 6] = [
    // Sleep
    [
        "Maintain consistent sleep/wake times — your body thrives on routine.",
        "Poor sleep increases stress. Try a relaxing evening routine to calm your mind.",
        "Extra rest boosts next-day energy more than caffeine.",
        "Sleep sharpens attention and memory. Even one bad night can reduce focus.",
        "Muscle recovery happens during deep sleep — plan workouts earlier to optimize rest.",
        "Sleep affects appetite. Proper rest helps you make healthier food choices.",
    ],
    // Stress
    [
        "Stress raises cortisol, which delays sleep. Power down screens 30 mins before bed.",
        "Daily stress management prevents burnout. Try 5-min breathing exercises.",
        "Stress drains energy. Short breaks and steady routines help maintain stamina.",
        "Stress overloads your mind. Mindful pauses improve concentration.",
        "Exercise reduces stress hormones. Even a quick walk helps.",
        "Stress affects cravings and digestion. Balanced meals stabilize mood.",
    ],
    // Energy
    [
        "Low energy often signals sleep debt. A consistent sleep schedule restores it naturally.",
        "Energy crashes increase stress. Maintain steady routines to balance both.",
        "Sustained energy comes from habits, not hacks. Regular meals prevent spikes and crashes.",
        "Focus dips when energy is low. Short breaks recharge your mental battery.",
        "Movement boosts circulation and energy. Even 10 min of activity helps.",
        "Fuel quality drives energy. Whole foods release energy steadily.",
    ],
    // Focus
    [
        "Sleep strengthens memory and attention. Avoid late-night distractions.",
        "Stress interrupts focus. Slow breathing clears mental clutter.",
        "Focus fades as energy drops. Short breaks help recharge your mind.",
        "Your brain works best in intervals. Try 25-min sessions for peak focus.",
        "Physical activity boosts brain oxygen. Move to refresh mental clarity.",
        "Hydration and nutrients support attention. Even mild dehydration impairs focus.",
    ],
    // Fitness
    [
        "Exercise improves sleep depth, but late workouts can delay rest.",
        "Fitness lowers stress hormones naturally. Short daily sessions build resilience.",
        "Regular activity increases long-term energy.",
        "Movement enhances cognitive function. A short workout boosts clarity.",
        "Consistency beats intensity. Small daily workouts produce lasting results.",
        "Nutrition fuels fitness. Protein and carbs help recovery and performance.",
    ],
    // Nutrition
    [
        "Heavy meals close to bedtime disrupt rest. Eat earlier for better sleep.",
        "Nutrient deficiencies increase stress sensitivity. Balanced meals help stabilize mood.",
        "Food quality drives energy. Whole foods prevent spikes and crashes.",
        "The brain needs steady fuel. Balanced meals improve mental performance.",
        "Nutrition supports recovery. Eating well boosts strength and training outcomes.",
        "Consistent, balanced eating supports every system in your body.",
    ],
];

/// Tips for offshore crews.
pub(crate) const OFFSHORE_TIPS: [[&str; 6]; 6] = [
    // Sleep
    [
        "Irregular shifts make sleep tricky. Use blackout curtains, earplugs, and a sleep mask to create night wherever you are.",
        "Poor sleep increases cortisol. Even a short nap can help manage tension between shifts.",
        "Sleep is your main energy source. A 20-min power nap can restore alertness like two cups of coffee.",
        "Sleep deprivation reduces attention. Stick to naps or quiet rest periods to maintain sharpness.",
        "Muscle recovery happens during sleep. Even short rest periods improve workout results.",
        "Sleep affects hunger hormones. Rest helps prevent cravings for high-sugar snacks in limited mess options.",
    ],
    // Stress
    [
        "Stress delays sleep, especially in tight quarters. Try deep breathing or guided meditation before bed.",
        "Isolation can heighten stress. Connect with colleagues, even briefly, to relieve tension.",
        "Stress drains energy fast. Structured breaks and pacing yourself during long shifts help restore stamina.",
        "High stress overloads your mind. Short mental resets improve clarity for critical tasks.",
        "Exercise in small spaces reduces stress hormones. Bodyweight circuits or stretching work well.",
        "Stress affects digestion and cravings. Opt for balanced meals with available options to stabilize mood.",
    ],
    // Energy
    [
        "Energy drops often signal sleep debt. Prioritize naps and consistent sleep when off-shift.",
        "Low energy increases stress. Hydration and pacing your workload help maintain both.",
        "Sustained energy offshore comes from habits, not caffeine. Eat regularly and move when possible.",
        "Mental focus drains energy. Use short breaks to recharge during long watch hours.",
        "Movement boosts circulation and energy. Even 10–15 minutes of stretching or stairs helps.",
        "Fuel quality matters. Protein-rich snacks and whole foods help avoid energy spikes and crashes.",
    ],
    // Focus
    [
        "Sleep restores attention and memory. Guard rest times around shift changes.",
        "Stress clouds focus. Mindful breathing or brief meditation clears mental noise.",
        "Focus fades when energy is low. Use micro-breaks to recharge.",
        "Brain works best in intervals. Try 25-min focused tasks with short movement breaks.",
        "Physical activity increases brain oxygen. Even short onboard workouts boost mental clarity.",
        "Hydration and small nutrient-rich snacks support attention during long shifts.",
    ],
    // Fitness
    [
        "Exercise improves sleep quality. Schedule workouts earlier in your shift cycle.",
        "Fitness lowers stress hormones naturally. Even short onboard routines help.",
        "Consistent activity increases energy throughout long days offshore.",
        "Movement improves cognitive function. Quick circuits can sharpen attention.",
        "Consistency is key in limited spaces. Daily short workouts outperform infrequent long ones.",
        "Fuel supports fitness. Use protein-rich meals and snacks for recovery and performance.",
    ],
    // Nutrition
    [
        "Heavy meals before rest disrupt sleep. Stick to light options near bedtime.",
        "Limited variety can increase stress sensitivity. Eat balanced meals when possible.",
        "Energy depends on available fuel. Prioritize nutrient-dense meals to avoid crashes.",
        "Steady fuel improves attention. Small, balanced portions prevent mid-shift dips.",
        "Nutrition aids recovery. Protein and carbs improve training outcomes even in confined gyms.",
        "Consistency matters. Eat regularly and hydrate to support all bodily systems offshore.",
    ],
];
